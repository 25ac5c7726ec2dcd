use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing_subscriber::EnvFilter;

use mips_rs::{RegisterNaming, TranslateConfig, Translator};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Translate hexadecimal MIPS-32 words into assembly"
)]
struct Opts {
    /// Register naming used in operands
    #[arg(long, value_enum, default_value_t = RegisterNaming::Symbolic)]
    regs: RegisterNaming,
    /// Prefix each line with the raw instruction word
    #[arg(long)]
    show_bytes: bool,
    /// Read words from FILE (one per line, `-` for stdin) instead of WORDS
    #[arg(short, long, value_name = "FILE", conflicts_with = "words")]
    input: Option<String>,
    #[arg(value_name = "WORDS")]
    words: Vec<String>,
}

/// One word per line; blank lines and `#` comments are skipped.
fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.split('#').next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let words = match opts.input.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            words_from_text(&buf)
        }
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            words_from_text(&text)
        }
        None => opts.words,
    };

    let tr = Translator::new(TranslateConfig { naming: opts.regs });
    for line in tr.translate_lines(&words)? {
        if opts.show_bytes {
            println!("{:#010x}: {}", line.raw, line.text);
        } else {
            println!("{}", line.text);
        }
    }

    Ok(())
}
