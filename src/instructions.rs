//! The static 6502 instruction table offered as completions.

use serde::Deserialize;

use crate::error::Result;

/// Mnemonic list embedded at build time.
const BUNDLED_6502: &str = include_str!("../data/6502.json");

/// Ordered list of instruction mnemonics.
///
/// Order is preserved from the source data and duplicates are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstructionTable {
    instructions: Vec<String>,
}

impl InstructionTable {
    /// Build a table from an explicit mnemonic list.
    pub fn new(instructions: Vec<String>) -> Self {
        Self { instructions }
    }

    /// Load the table bundled with the server.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_6502)
    }

    /// Parse a `{ "instructions": [...] }` document.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn mnemonics(&self) -> &[String] {
        &self.instructions
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.instructions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
