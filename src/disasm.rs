use crate::decoder::Decoded;
use crate::instructions::Shape;
use crate::regs::RegisterNaming;

pub fn fmt_decoded(d: &Decoded, naming: RegisterNaming) -> String {
    let mn = d.mnemonic();
    match *d {
        Decoded::Register { rs, rt, rd, .. } => {
            let (rs, rt, rd) = (rs.name(naming), rt.name(naming), rd.name(naming));
            match d.shape() {
                Shape::Bare => mn.to_string(),
                Shape::OneReg => format!("{mn} {rs}"),
                Shape::TwoReg => format!("{mn} {rs}, {rt}"),
                _ => format!("{mn} {rd}, {rs}, {rt}"),
            }
        }
        Decoded::Immediate { rs, rt, imm, .. } => {
            let (rs, rt) = (rs.name(naming), rt.name(naming));
            match d.shape() {
                Shape::Offset => format!("{mn} {rt}, {imm}({rs})"),
                Shape::RegImm => format!("{mn} {rs}, {imm}"),
                _ => format!("{mn} {rs}, {rt}, {imm}"),
            }
        }
        // 26-bit target printed as its bit pattern, not as an address
        Decoded::Jump { target, .. } => format!("{mn} {target:026b}"),
    }
}
