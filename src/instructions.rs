//! Static opcode and function-code tables.

use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Operand layout of a rendered instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// `syscall`
    Bare,
    /// `op rs`
    OneReg,
    /// `op rs, rt`
    TwoReg,
    /// `op rd, rs, rt`
    ThreeReg,
    /// `op rt, imm(rs)`
    Offset,
    /// `op rs, imm`
    RegImm,
    /// `op rs, rt, imm`
    RegRegImm,
    /// `op target`
    Target,
}

/// Function codes of the SPECIAL (opcode 0) group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Funct {
    Sll = 0,
    Srl = 2,
    Sra = 3,
    Sllv = 4,
    Srlv = 6,
    Srav = 7,
    Jr = 8,
    Syscall = 12,
    Mfhi = 16,
    Mflo = 18,
    Mult = 24,
    Multu = 25,
    Div = 26,
    Divu = 27,
    Add = 32,
    Addu = 33,
    Sub = 34,
    Subu = 35,
    And = 36,
    Or = 37,
    Xor = 38,
    Nor = 39,
    Slt = 42,
}

/// Primary opcodes other than SPECIAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Opcode {
    Bltz = 1,
    J = 2,
    Jal = 3,
    Beq = 4,
    Bne = 5,
    Blez = 6,
    Bgtz = 7,
    Addi = 8,
    Addiu = 9,
    Slti = 10,
    Andi = 12,
    Ori = 13,
    Xori = 14,
    Lui = 15,
    Lb = 32,
    Lw = 35,
    Lbu = 36,
    Sb = 40,
    Sw = 43,
}

impl Funct {
    pub const ALL: [Funct; 23] = [
        Funct::Sll, Funct::Srl, Funct::Sra, Funct::Sllv, Funct::Srlv, Funct::Srav,
        Funct::Jr, Funct::Syscall, Funct::Mfhi, Funct::Mflo, Funct::Mult, Funct::Multu,
        Funct::Div, Funct::Divu, Funct::Add, Funct::Addu, Funct::Sub, Funct::Subu,
        Funct::And, Funct::Or, Funct::Xor, Funct::Nor, Funct::Slt,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Funct::Sll => "sll",
            Funct::Srl => "srl",
            Funct::Sra => "sra",
            Funct::Sllv => "sllv",
            Funct::Srlv => "srlv",
            Funct::Srav => "srav",
            Funct::Jr => "jr",
            Funct::Syscall => "syscall",
            Funct::Mfhi => "mfhi",
            Funct::Mflo => "mflo",
            Funct::Mult => "mult",
            Funct::Multu => "multu",
            Funct::Div => "div",
            Funct::Divu => "divu",
            Funct::Add => "add",
            Funct::Addu => "addu",
            Funct::Sub => "sub",
            Funct::Subu => "subu",
            Funct::And => "and",
            Funct::Or => "or",
            Funct::Xor => "xor",
            Funct::Nor => "nor",
            Funct::Slt => "slt",
        }
    }

    // sll/srl/sra carry a shift amount that is not rendered.
    pub fn shape(self) -> Shape {
        use Funct::*;
        match self {
            Syscall => Shape::Bare,
            Mfhi | Mflo | Jr => Shape::OneReg,
            Mult | Multu | Div | Divu => Shape::TwoReg,
            Sll | Srl | Sra | Sllv | Srlv | Srav | Add | Addu | Sub | Subu | And | Or | Xor
            | Nor | Slt => Shape::ThreeReg,
        }
    }
}

impl Opcode {
    pub const ALL: [Opcode; 19] = [
        Opcode::Bltz, Opcode::J, Opcode::Jal, Opcode::Beq, Opcode::Bne, Opcode::Blez,
        Opcode::Bgtz, Opcode::Addi, Opcode::Addiu, Opcode::Slti, Opcode::Andi, Opcode::Ori,
        Opcode::Xori, Opcode::Lui, Opcode::Lb, Opcode::Lw, Opcode::Lbu, Opcode::Sb, Opcode::Sw,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Bltz => "bltz",
            Opcode::J => "j",
            Opcode::Jal => "jal",
            Opcode::Beq => "beq",
            Opcode::Bne => "bne",
            Opcode::Blez => "blez",
            Opcode::Bgtz => "bgtz",
            Opcode::Addi => "addi",
            Opcode::Addiu => "addiu",
            Opcode::Slti => "slti",
            Opcode::Andi => "andi",
            Opcode::Ori => "ori",
            Opcode::Xori => "xori",
            Opcode::Lui => "lui",
            Opcode::Lb => "lb",
            Opcode::Lw => "lw",
            Opcode::Lbu => "lbu",
            Opcode::Sb => "sb",
            Opcode::Sw => "sw",
        }
    }

    pub fn shape(self) -> Shape {
        use Opcode::*;
        match self {
            J | Jal => Shape::Target,
            Lb | Lbu | Lw | Sb | Sw => Shape::Offset,
            Lui | Bltz => Shape::RegImm,
            Beq | Bne | Blez | Bgtz | Addi | Addiu | Slti | Andi | Ori | Xori => Shape::RegRegImm,
        }
    }
}

impl FromPrimitive for Funct {
    fn from_i64(n: i64) -> Option<Self> {
        u64::try_from(n).ok().and_then(Self::from_u64)
    }

    fn from_u64(n: u64) -> Option<Self> {
        Funct::ALL.into_iter().find(|f| f.code() as u64 == n)
    }
}

impl FromPrimitive for Opcode {
    fn from_i64(n: i64) -> Option<Self> {
        u64::try_from(n).ok().and_then(Self::from_u64)
    }

    fn from_u64(n: u64) -> Option<Self> {
        Opcode::ALL.into_iter().find(|o| o.code() as u64 == n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;
    use pretty_assertions::assert_eq;

    #[test]
    fn tables_round_trip_codes() {
        for f in Funct::ALL {
            assert_eq!(Funct::from_u8(f.code()), Some(f));
        }
        for o in Opcode::ALL {
            assert_eq!(Opcode::from_u8(o.code()), Some(o));
        }
        assert_eq!(Funct::from_u8(63), None);
        assert_eq!(Opcode::from_u8(0), None);
        assert_eq!(Opcode::from_i64(-1), None);
    }

    #[test]
    fn jump_shape_iff_jump_format() {
        for o in Opcode::ALL {
            let is_jump = Format::from_opcode(o.code()) == Format::Jump;
            assert_eq!(o.shape() == Shape::Target, is_jump, "{}", o.mnemonic());
        }
    }

    #[test]
    fn mnemonics_are_unique() {
        let mut names: Vec<&str> = Funct::ALL.iter().map(|f| f.mnemonic())
            .chain(Opcode::ALL.iter().map(|o| o.mnemonic()))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
