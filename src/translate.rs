//! Batch translation of hexadecimal words into assembly text.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::decoder::{DecodeError, Decoded, MipsDecoder};
use crate::disasm::fmt_decoded;
use crate::fields::{bit_string, word_bits};
use crate::format::Format;
use crate::regs::RegisterNaming;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub naming: RegisterNaming,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("malformed instruction word {text:?} at position {index}: {reason}")]
    MalformedWord { index: usize, text: String, reason: String },
    #[error("instruction {index} ({raw:#010x}): {source}")]
    Decode {
        index: usize,
        raw: u32,
        #[source]
        source: DecodeError,
    },
}

impl TranslateError {
    /// Position of the failing word in the batch.
    pub fn index(&self) -> usize {
        match self {
            TranslateError::MalformedWord { index, .. } | TranslateError::Decode { index, .. } => *index,
        }
    }

    /// Raw opcode/function value and format for unknown encodings.
    pub fn encoding(&self) -> Option<(u8, Format)> {
        match self {
            TranslateError::Decode { source, .. } => source.encoding(),
            TranslateError::MalformedWord { .. } => None,
        }
    }
}

/// Parse one hexadecimal word. A single `0x` prefix and surrounding
/// whitespace are accepted; anything above 32 bits is rejected.
pub fn parse_word(text: &str) -> Result<u32, String> {
    let t = text.trim();
    let digits = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).unwrap_or(t);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("not a hexadecimal integer".into());
    }
    u32::from_str_radix(digits, 16).map_err(|_| "value exceeds 32 bits".into())
}

/// One decoded instruction, kept together with its source word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub index: usize,
    pub raw: u32,
    pub decoded: Decoded,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    cfg: TranslateConfig,
    dec: MipsDecoder,
}

impl Translator {
    pub fn new(cfg: TranslateConfig) -> Self {
        Self { cfg, dec: MipsDecoder::new() }
    }

    pub fn config(&self) -> &TranslateConfig {
        &self.cfg
    }

    fn line(&self, index: usize, text: &str) -> Result<Line, TranslateError> {
        let raw = parse_word(text).map_err(|reason| TranslateError::MalformedWord {
            index,
            text: text.to_string(),
            reason,
        })?;
        let bits = word_bits(raw);
        trace!(index, bits = %bit_string(&bits), format = %Format::classify(&bits), "decoding");
        let decoded = self
            .dec
            .decode_bits(&bits)
            .map_err(|source| TranslateError::Decode { index, raw, source })?;
        Ok(Line { index, raw, decoded, text: fmt_decoded(&decoded, self.cfg.naming) })
    }

    /// Decode every word in order. Stops at the first failure; no partial
    /// output is returned.
    pub fn translate_lines<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Line>, TranslateError> {
        debug!(count = words.len(), naming = ?self.cfg.naming, "translating batch");
        let lines = words
            .iter()
            .enumerate()
            .map(|(i, w)| self.line(i, w.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                warn!(error = %e, "batch aborted");
                e
            })?;
        debug!(count = lines.len(), "batch translated");
        Ok(lines)
    }

    pub fn translate<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>, TranslateError> {
        Ok(self.translate_lines(words)?.into_iter().map(|l| l.text).collect())
    }

    /// Same as [`Translator::translate`], joined with `\n`.
    pub fn translate_to_string<S: AsRef<str>>(&self, words: &[S]) -> Result<String, TranslateError> {
        Ok(self.translate(words)?.join("\n"))
    }
}

pub fn translate<S: AsRef<str>>(words: &[S], naming: RegisterNaming) -> Result<Vec<String>, TranslateError> {
    Translator::new(TranslateConfig { naming }).translate(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_word_accepts_prefix_and_short_input() {
        assert_eq!(parse_word("0x0000000c"), Ok(12));
        assert_eq!(parse_word(" 8D090004 "), Ok(0x8D09_0004));
        assert_eq!(parse_word("c"), Ok(12));
        assert_eq!(parse_word("FFFFFFFF"), Ok(u32::MAX));
    }

    #[test]
    fn parse_word_rejects_garbage_and_overflow() {
        assert!(parse_word("").is_err());
        assert!(parse_word("0x").is_err());
        assert!(parse_word("xyz").is_err());
        assert!(parse_word("+1").is_err());
        assert_eq!(parse_word("100000000"), Err("value exceeds 32 bits".to_string()));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: TranslateConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.naming, RegisterNaming::Symbolic);
        let cfg: TranslateConfig = serde_json::from_str(r#"{"naming":"numeric"}"#).unwrap();
        assert_eq!(cfg.naming, RegisterNaming::Numeric);
    }
}
