use mips_rs::fields::{word_bits, I_BOUNDS, J_BOUNDS, R_BOUNDS};
use mips_rs::{Format, RegisterNaming};
use pretty_assertions::assert_eq;

#[test]
fn every_opcode_is_classified() {
    for op in 0u32..64 {
        let expected = match op {
            0 => Format::Register,
            2 | 3 => Format::Jump,
            _ => Format::Immediate,
        };
        // low bits must not influence the result
        for low in [0u32, 0x03FF_FFFF, 0x0155_5555] {
            assert_eq!(Format::classify(&word_bits((op << 26) | low)), expected, "opcode {op}");
        }
    }
}

#[test]
fn boundary_sets_cover_the_word() {
    for bounds in [&R_BOUNDS[..], &I_BOUNDS[..], &J_BOUNDS[..]] {
        let widths: usize = bounds.windows(2).map(|w| w[1] - w[0]).sum();
        assert_eq!(widths, 32);
    }
    assert_eq!(R_BOUNDS.len() - 1, 6);
    assert_eq!(I_BOUNDS.len() - 1, 4);
    assert_eq!(J_BOUNDS.len() - 1, 2);
}

#[test]
fn numeric_naming_is_injective_symbolic_is_total() {
    let mut numeric: Vec<&str> = (0..32).map(|i| RegisterNaming::Numeric.name(i).unwrap()).collect();
    numeric.sort_unstable();
    numeric.dedup();
    assert_eq!(numeric.len(), 32);
    for i in 0..32 {
        assert!(RegisterNaming::Symbolic.name(i).is_ok());
    }
    assert!(RegisterNaming::Symbolic.name(32).is_err());
}
