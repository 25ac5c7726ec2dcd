use serde::{Deserialize, Serialize};

/// How register operands are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RegisterNaming {
    /// `$0` .. `$31`
    Numeric,
    /// `$zero`, `$at`, `$v0`, ... as emitted by MIPS assemblers
    #[default]
    Symbolic,
}

const SYMBOLIC: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3",
    "$t0", "$t1", "$t2", "$t3", "$t4", "$t5", "$t6", "$t7",
    "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7",
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

const NUMERIC: [&str; 32] = [
    "$0", "$1", "$2", "$3", "$4", "$5", "$6", "$7",
    "$8", "$9", "$10", "$11", "$12", "$13", "$14", "$15",
    "$16", "$17", "$18", "$19", "$20", "$21", "$22", "$23",
    "$24", "$25", "$26", "$27", "$28", "$29", "$30", "$31",
];

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("register index {0} is outside 0..=31")]
pub struct InvalidRegisterIndex(pub u32);

/// A general purpose register index, always in `0..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Reg(u8);

impl Reg {
    pub const COUNT: u32 = 32;

    pub fn new(index: u32) -> Result<Self, InvalidRegisterIndex> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            Err(InvalidRegisterIndex(index))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self, naming: RegisterNaming) -> &'static str {
        naming.table()[self.0 as usize]
    }
}

impl TryFrom<u32> for Reg {
    type Error = InvalidRegisterIndex;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Reg::new(index)
    }
}

impl From<Reg> for u32 {
    fn from(r: Reg) -> u32 {
        r.0 as u32
    }
}

impl RegisterNaming {
    fn table(self) -> &'static [&'static str; 32] {
        match self {
            RegisterNaming::Numeric => &NUMERIC,
            RegisterNaming::Symbolic => &SYMBOLIC,
        }
    }

    /// Display name for a raw register index; rejects anything above 31.
    pub fn name(self, index: u32) -> Result<&'static str, InvalidRegisterIndex> {
        Ok(Reg::new(index)?.name(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn symbolic_names_follow_abi() {
        assert_eq!(RegisterNaming::Symbolic.name(0).unwrap(), "$zero");
        assert_eq!(RegisterNaming::Symbolic.name(8).unwrap(), "$t0");
        assert_eq!(RegisterNaming::Symbolic.name(24).unwrap(), "$t8");
        assert_eq!(RegisterNaming::Symbolic.name(31).unwrap(), "$ra");
    }

    #[test]
    fn out_of_range_is_rejected_not_wrapped() {
        assert_eq!(RegisterNaming::Numeric.name(32), Err(InvalidRegisterIndex(32)));
        assert!(Reg::new(u32::MAX).is_err());
    }

    #[test]
    fn reg_serde_rejects_bad_index() {
        let r: Reg = serde_json::from_str("9").unwrap();
        assert_eq!(r.index(), 9);
        assert!(serde_json::from_str::<Reg>("40").is_err());
    }
}
