//! paramdef CLI - compiles a parameter table into a C++ defines header.

use std::path::PathBuf;

use clap::Parser;
use paramdef_core::{CompileOptions, check_file, compile_file};

#[derive(Parser)]
#[command(name = "paramdef")]
#[command(author, version, about = "Parameter table to header compiler", long_about = None)]
struct Cli {
    /// Source parameter table (CSV, first line is the header)
    #[arg(long, short = 'i', value_name = "FILE", default_value = "parameters.csv")]
    input: PathBuf,

    /// Generated header destination
    #[arg(long, short = 'o', value_name = "FILE", default_value = "ParameterDefines.h")]
    output: PathBuf,

    /// Parameter identifier with host-side custom value<->string functions
    /// (repeatable)
    #[arg(long, value_name = "IDENT")]
    custom: Vec<String>,

    /// Validate the table without writing the header
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = CompileOptions {
        custom_functions: cli.custom,
    };

    if cli.check {
        let count = check_file(&cli.input, &options)?;
        tracing::info!(input = %cli.input.display(), parameters = count, "table validated");
        println!("{}: {count} parameters OK", cli.input.display());
        return Ok(());
    }

    let count = compile_file(&cli.input, &cli.output, &options)?;
    tracing::info!(output = %cli.output.display(), parameters = count, "header generated");
    println!(
        "{} -> {} ({count} parameters)",
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}
