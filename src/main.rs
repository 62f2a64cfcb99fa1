use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;

const DEFAULT_OUTPUT: &str = "output.bin";

#[derive(Parser, Debug)]
#[command(
    name = "m6502asm",
    version,
    about = "Assembles 6502 source with literal hex operands into a raw binary"
)]
struct Cli {
    /// Assembly source file.
    input: PathBuf,
    /// Binary output file.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Suppress the success message.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("an error occurred when opening {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("compilation failed: {0}")]
    Compile(#[from] m6502asm::Error),
    #[error("an error occurred when writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

fn run(cli: &Cli) -> Result<usize, CliError> {
    let source = fs::read_to_string(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;
    let code = m6502asm::compile(&source)?;
    fs::write(&cli.output, &code).map_err(|source| CliError::Write {
        path: cli.output.clone(),
        source,
    })?;
    Ok(code.len())
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(size) => {
            if !cli.quiet {
                eprintln!(
                    "Compilation completed successfully: {} bytes written to {}.",
                    size,
                    cli.output.display()
                );
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
