//! Standalone disassembler binary: reads a raw binary file and writes
//! `INPUT.disassembled` next to it.

use std::path::PathBuf;

use clap::Parser;
use i8080emu::disassembler::disassemble_file;
use i8080emu::error::Error;

#[derive(Parser)]
#[command(about = "Disassemble an Intel 8080 binary image")]
struct Args {
    /// Path to the raw binary file to disassemble.
    input: PathBuf,

    /// Prefix each line with its byte offset.
    #[arg(long)]
    addr: bool,
}

fn main() -> i8080emu::error::Result<()> {
    let args = Args::parse();
    let listing = disassemble_file(&args.input, args.addr)?;

    if listing.is_empty() {
        return Err(Error::invalid_argument(args.input.display(), "file is empty"));
    }

    let mut output_name = args.input.file_name().unwrap_or_default().to_os_string();
    output_name.push(".disassembled");
    let output_path = args.input.with_file_name(output_name);

    std::fs::write(&output_path, listing)?;
    println!("wrote {}", output_path.display());
    Ok(())
}
