//! Quickbeam driver
//!
//! Reads a serialized AST document, translates it into host source text,
//! and either prints the text or hands it to an external host evaluator.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use quickbeam::{render_to_string, CommandEvaluator, HostEvaluator, SourceDoc};

/// Document location used when no path argument is given.
const DEFAULT_SOURCE: &str = "/var/quickbeam/source.json";

#[derive(Parser, Debug)]
#[command(
    name = "quickbeam",
    version,
    about = "Translate a serialized AST document and run it on a host evaluator"
)]
struct Cli {
    /// Path to the serialized AST document
    #[arg(default_value = DEFAULT_SOURCE)]
    path: PathBuf,

    /// Print the generated source instead of executing it
    #[arg(long)]
    emit: bool,

    /// Host command used to execute the generated source
    #[arg(long, default_value = "dotnet-script")]
    host: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let bytes = fs::read(&cli.path).with_context(|| format!("reading {:?}", cli.path))?;
    let doc: SourceDoc =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {:?}", cli.path))?;

    let term = doc.decode().context("decoding AST document")?;
    let source = render_to_string(&term).context("rendering host source")?;

    if cli.emit {
        print!("{source}");
        return Ok(ExitCode::SUCCESS);
    }

    let evaluator = CommandEvaluator::new(&cli.host)?;
    let output = evaluator.evaluate(&source)?;
    print!("{}", output.stdout);
    eprint!("{}", output.stderr);

    Ok(if output.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
