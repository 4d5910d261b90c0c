//! Symbol table management for labels

use crate::assembler::Symbol;

/// Symbol table for managing label definitions
///
/// Lives only for one assembly run. Names are case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Create a new empty symbol table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol to the table
    ///
    /// Returns Ok(()) on success, Err with the existing symbol if the name is taken
    pub fn add_symbol(
        &mut self,
        name: String,
        address: u16,
        defined_at: usize,
    ) -> Result<(), Symbol> {
        if let Some(existing) = self.lookup_symbol(&name) {
            return Err(existing.clone());
        }

        self.symbols.push(Symbol {
            name,
            address,
            defined_at,
        });

        Ok(())
    }

    /// Look up a symbol by name
    pub fn lookup_symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Get all symbols, in definition order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }
}
