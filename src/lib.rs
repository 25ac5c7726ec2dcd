pub mod decoder;
pub mod disasm;
pub mod fields;
pub mod format;
pub mod instructions;
pub mod regs;
pub mod translate;

pub use decoder::{DecodeError, Decoded, Decoder, MipsDecoder};
pub use format::Format;
pub use regs::{Reg, RegisterNaming};
pub use translate::{translate, TranslateConfig, TranslateError, Translator};
