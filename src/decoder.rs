use num_traits::FromPrimitive;
use serde::Serialize;

use crate::fields::{word_bits, Bits, IFields, JFields, RFields};
use crate::format::Format;
use crate::instructions::{Funct, Opcode, Shape};
use crate::regs::{InvalidRegisterIndex, Reg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format")]
pub enum Decoded {
    Register { funct: Funct, rs: Reg, rt: Reg, rd: Reg, shamt: u8 },
    Immediate { op: Opcode, rs: Reg, rt: Reg, imm: u16 },
    Jump { op: Opcode, target: u32 },
}

impl Decoded {
    pub fn format(&self) -> Format {
        match self {
            Decoded::Register { .. } => Format::Register,
            Decoded::Immediate { .. } => Format::Immediate,
            Decoded::Jump { .. } => Format::Jump,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Decoded::Register { funct, .. } => funct.mnemonic(),
            Decoded::Immediate { op, .. } | Decoded::Jump { op, .. } => op.mnemonic(),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Decoded::Register { funct, .. } => funct.shape(),
            Decoded::Immediate { op, .. } | Decoded::Jump { op, .. } => op.shape(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown instruction encoding: function {code} in {format}-format word")]
    UnknownFunction { code: u8, format: Format },
    #[error("unknown instruction encoding: opcode {code} in {format}-format word")]
    UnknownOpcode { code: u8, format: Format },
    #[error(transparent)]
    Register(#[from] InvalidRegisterIndex),
}

impl DecodeError {
    /// The raw opcode/function value and the format it was looked up for.
    pub fn encoding(&self) -> Option<(u8, Format)> {
        match *self {
            DecodeError::UnknownFunction { code, format }
            | DecodeError::UnknownOpcode { code, format } => Some((code, format)),
            DecodeError::Register(_) => None,
        }
    }
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Result<Decoded, DecodeError>;
}

/// MIPS-32 integer subset: SPECIAL arithmetic/logic, immediates, loads,
/// stores, branches and the two absolute jumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct MipsDecoder;

impl MipsDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode_bits(&self, bits: &Bits) -> Result<Decoded, DecodeError> {
        match Format::classify(bits) {
            Format::Register => decode_r(RFields::split(bits)),
            Format::Immediate => decode_i(IFields::split(bits)),
            Format::Jump => decode_j(JFields::split(bits)),
        }
    }
}

impl Decoder for MipsDecoder {
    fn decode(&self, raw32: u32) -> Result<Decoded, DecodeError> {
        self.decode_bits(&word_bits(raw32))
    }
}

fn decode_r(f: RFields) -> Result<Decoded, DecodeError> {
    let funct = Funct::from_u8(f.funct)
        .ok_or(DecodeError::UnknownFunction { code: f.funct, format: Format::Register })?;
    Ok(Decoded::Register {
        funct,
        rs: Reg::new(f.rs)?,
        rt: Reg::new(f.rt)?,
        rd: Reg::new(f.rd)?,
        shamt: f.shamt,
    })
}

fn decode_i(f: IFields) -> Result<Decoded, DecodeError> {
    // J/JAL never reach here; the classifier routes them to decode_j
    let op = Opcode::from_u8(f.opcode)
        .filter(|op| op.shape() != Shape::Target)
        .ok_or(DecodeError::UnknownOpcode { code: f.opcode, format: Format::Immediate })?;
    Ok(Decoded::Immediate { op, rs: Reg::new(f.rs)?, rt: Reg::new(f.rt)?, imm: f.imm })
}

fn decode_j(f: JFields) -> Result<Decoded, DecodeError> {
    let op = Opcode::from_u8(f.opcode)
        .filter(|op| op.shape() == Shape::Target)
        .ok_or(DecodeError::UnknownOpcode { code: f.opcode, format: Format::Jump })?;
    Ok(Decoded::Jump { op, target: f.target })
}
