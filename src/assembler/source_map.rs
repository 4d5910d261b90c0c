//! Source map for bidirectional mapping between machine code and source lines

/// Bidirectional mapping between instruction addresses and source lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    /// Instruction ranges with their source line, sorted by start address
    address_to_source: Vec<(AddressRange, usize)>,
}

/// The bytes of one assembled instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    /// Address of the opcode byte
    pub start: u16,

    /// Instruction size in bytes
    pub len: u8,
}

impl AddressRange {
    /// True when `address` is one of this instruction's bytes.
    pub fn contains(&self, address: u16) -> bool {
        address.wrapping_sub(self.start) < self.len as u16
    }
}

impl SourceMap {
    /// Create a new empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `line` (1-indexed) assembled to `len` bytes at `start`
    pub fn add_mapping(&mut self, start: u16, len: u8, line: usize) {
        self.address_to_source
            .push((AddressRange { start, len }, line));
    }

    /// Source line of the instruction covering `address`
    pub fn line_for_address(&self, address: u16) -> Option<usize> {
        let index = self
            .address_to_source
            .partition_point(|(range, _)| range.start <= address);
        let (range, line) = self.address_to_source.get(index.checked_sub(1)?)?;
        range.contains(address).then_some(*line)
    }

    /// Instruction bytes assembled from `line`
    pub fn address_range(&self, line: usize) -> Option<AddressRange> {
        self.address_to_source
            .iter()
            .find(|(_, l)| *l == line)
            .map(|(range, _)| *range)
    }

    /// Number of mapped instructions
    pub fn len(&self) -> usize {
        self.address_to_source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.address_to_source.is_empty()
    }

    /// Mapped instructions in address order
    pub fn iter(&self) -> impl Iterator<Item = (AddressRange, usize)> + '_ {
        self.address_to_source.iter().copied()
    }

    /// Finalize the source map (sort for binary search)
    pub fn finalize(&mut self) {
        self.address_to_source
            .sort_by_key(|(range, _)| range.start);
    }
}
