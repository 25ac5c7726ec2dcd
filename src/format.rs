use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fields::{opcode_of, Bits};

/// The three MIPS-32 word layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Register,
    Immediate,
    Jump,
}

impl Format {
    /// Every opcode maps to exactly one format; immediate is the catch-all.
    pub fn from_opcode(opcode: u8) -> Self {
        match opcode {
            0 => Format::Register,
            2 | 3 => Format::Jump,
            _ => Format::Immediate,
        }
    }

    pub fn classify(bits: &Bits) -> Self {
        Self::from_opcode(opcode_of(bits))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Register => "R",
            Format::Immediate => "I",
            Format::Jump => "J",
        })
    }
}
