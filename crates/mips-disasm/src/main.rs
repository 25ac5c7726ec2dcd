use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mips_rs::translate::Line;
use mips_rs::{RegisterNaming, TranslateConfig, Translator};

mod model;
use model::{list_inputs, load_program, output_name};

#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS-32 disassembler CLI", long_about=None)]
struct Cli {
    /// Register naming (overrides --config)
    #[arg(long, value_enum, global = true)]
    regs: Option<RegisterNaming>,
    /// JSON translate config, e.g. {"naming":"numeric"}
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate every program file in a directory
    Batch {
        /// Directory of `{ "text": [...] }` program files
        #[arg(long, default_value = "input")]
        input_dir: PathBuf,
        /// Directory receiving translated files
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
        /// Replaces `input` in each output file name
        #[arg(long, default_value = "output")]
        tag: String,
    },
    /// Translate a single program file
    File {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, Clone, serde::Serialize)]
struct LineOut<'a> {
    index: usize,
    raw: String,
    format: String,
    mnemonic: &'static str,
    text: &'a str,
}

fn load_config(cli: &Cli) -> Result<TranslateConfig> {
    let mut cfg = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => TranslateConfig::default(),
    };
    if let Some(naming) = cli.regs { cfg.naming = naming; }
    Ok(cfg)
}

/// Translated program as stored on disk: one JSON string, lines joined by `\n`.
fn translate_file(tr: &Translator, path: &Path) -> Result<String> {
    let prog = load_program(path)?;
    let text = tr.translate_to_string(&prog.text).with_context(|| format!("translating {}", path.display()))?;
    Ok(serde_json::to_string_pretty(&text)?)
}

fn run_batch(tr: &Translator, input_dir: &Path, output_dir: &Path, tag: &str) -> Result<usize> {
    std::fs::create_dir_all(output_dir).with_context(|| format!("creating {}", output_dir.display()))?;
    let files = list_inputs(input_dir)?;
    for path in &files {
        let json = translate_file(tr, path)?;
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let dest = output_dir.join(output_name(&name, tag));
        std::fs::write(&dest, json).with_context(|| format!("writing {}", dest.display()))?;
        info!(src = %path.display(), dest = %dest.display(), "translated");
    }
    Ok(files.len())
}

fn render_lines(lines: &[Line], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut buf = String::new();
            for l in lines {
                buf.push_str(&l.text);
                buf.push('\n');
            }
            Ok(buf)
        }
        OutputFormat::Json => {
            let out: Vec<LineOut> = lines
                .iter()
                .map(|l| LineOut {
                    index: l.index,
                    raw: format!("{:#010x}", l.raw),
                    format: l.decoded.format().to_string(),
                    mnemonic: l.decoded.mnemonic(),
                    text: &l.text,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&out)?)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let tr = Translator::new(load_config(&cli)?);

    match &cli.cmd {
        Command::Batch { input_dir, output_dir, tag } => {
            let n = run_batch(&tr, input_dir, output_dir, tag)?;
            info!(files = n, "batch complete");
        }
        Command::File { input, format, out } => {
            let prog = load_program(input)?;
            let lines = tr.translate_lines(&prog.text).with_context(|| format!("translating {}", input.display()))?;
            let buf = render_lines(&lines, *format)?;
            if let Some(path) = out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mips-disasm-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn batch_writes_joined_json_string() {
        let root = scratch("batch");
        let (inp, outp) = (root.join("input"), root.join("output"));
        std::fs::create_dir_all(&inp).unwrap();
        std::fs::write(inp.join("t1.input.json"), r#"{"text":["01095020","0000000c"]}"#).unwrap();

        let tr = Translator::new(TranslateConfig::default());
        assert_eq!(run_batch(&tr, &inp, &outp, "output").unwrap(), 1);

        let written = std::fs::read_to_string(outp.join("t1.output.json")).unwrap();
        let text: String = serde_json::from_str(&written).unwrap();
        assert_eq!(text, "add $t2, $t0, $t1\nsyscall");
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn batch_aborts_on_unknown_encoding() {
        let root = scratch("abort");
        std::fs::write(root.join("bad.input.json"), r#"{"text":["0000003f"]}"#).unwrap();
        let tr = Translator::new(TranslateConfig::default());
        let err = run_batch(&tr, &root, &root.join("out"), "output").unwrap_err();
        assert!(format!("{err:#}").contains("function 63"));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn json_listing_has_metadata() {
        let tr = Translator::new(TranslateConfig { naming: RegisterNaming::Numeric });
        let lines = tr.translate_lines(&["8d090004"]).unwrap();
        let json = render_lines(&lines, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["mnemonic"], "lw");
        assert_eq!(v[0]["format"], "I");
        assert_eq!(v[0]["raw"], "0x8d090004");
        assert_eq!(v[0]["text"], "lw $9, 4($8)");
    }
}
