//! Bit-level view of an instruction word and the per-format field layouts.
//!
//! Offsets are counted from the most significant bit, so bit 0 is the top
//! bit of the opcode.

use bitvec::prelude::*;

/// A 32-bit instruction word viewed MSB-first.
pub type WordBits = BitArray<u32, Msb0>;
pub type Bits = BitSlice<u32, Msb0>;

pub const WORD_BITS: usize = 32;

/// opcode | rs | rt | rd | shamt | funct
pub const R_BOUNDS: [usize; 7] = [0, 6, 11, 16, 21, 26, 32];
/// opcode | rs | rt | immediate
pub const I_BOUNDS: [usize; 5] = [0, 6, 11, 16, 32];
/// opcode | target
pub const J_BOUNDS: [usize; 3] = [0, 6, 32];

pub fn word_bits(word: u32) -> WordBits {
    BitArray::new(word)
}

/// Render bits as `0`/`1` text, most significant first.
pub fn bit_string(bits: &Bits) -> String {
    bits.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect()
}

/// Slice `bits` at each pair of consecutive boundaries.
///
/// Boundaries are fixed per format, so a malformed set is a bug and panics.
pub fn split_bits<'a>(bits: &'a Bits, bounds: &[usize]) -> Vec<&'a Bits> {
    assert!(
        bounds.first() == Some(&0) && bounds.last() == Some(&bits.len()),
        "field boundaries {bounds:?} must span 0..{}",
        bits.len()
    );
    assert!(
        bounds.windows(2).all(|w| w[0] < w[1]),
        "field boundaries {bounds:?} must be strictly increasing"
    );
    bounds.windows(2).map(|w| &bits[w[0]..w[1]]).collect()
}

/// Top six bits of the word.
pub fn opcode_of(bits: &Bits) -> u8 {
    bits[..6].load_be::<u8>()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RFields {
    pub opcode: u8,
    pub rs: u32,
    pub rt: u32,
    pub rd: u32,
    pub shamt: u8,
    pub funct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IFields {
    pub opcode: u8,
    pub rs: u32,
    pub rt: u32,
    pub imm: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JFields {
    pub opcode: u8,
    pub target: u32,
}

impl RFields {
    pub fn split(bits: &Bits) -> Self {
        let f = split_bits(bits, &R_BOUNDS);
        Self {
            opcode: f[0].load_be(),
            rs: f[1].load_be(),
            rt: f[2].load_be(),
            rd: f[3].load_be(),
            shamt: f[4].load_be(),
            funct: f[5].load_be(),
        }
    }
}

impl IFields {
    pub fn split(bits: &Bits) -> Self {
        let f = split_bits(bits, &I_BOUNDS);
        Self {
            opcode: f[0].load_be(),
            rs: f[1].load_be(),
            rt: f[2].load_be(),
            imm: f[3].load_be(),
        }
    }
}

impl JFields {
    pub fn split(bits: &Bits) -> Self {
        let f = split_bits(bits, &J_BOUNDS);
        Self { opcode: f[0].load_be(), target: f[1].load_be() }
    }
}
