use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use huffpack::{compress, container, decompress};

#[derive(Parser)]
#[command(name = "huffpack", version, about = "Huffman file compressor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a file
    Encode {
        /// File to compress
        input: PathBuf,
        /// Where to write the container
        output: PathBuf,
    },
    /// Restore a compressed file
    Decode {
        /// Container produced by `encode`
        input: PathBuf,
        /// Where to write the original bytes
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Encode { input, output } => {
            let data =
                fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let payload = compress(&data)?;
            let serialized = container::to_bytes(&payload);
            fs::write(&output, &serialized)
                .with_context(|| format!("writing {}", output.display()))?;
            println!(
                "{} -> {}: {} bytes in, {} bytes out",
                input.display(),
                output.display(),
                data.len(),
                serialized.len()
            );
        }
        Command::Decode { input, output } => {
            let data =
                fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let payload = container::from_bytes(&data)
                .with_context(|| format!("parsing {}", input.display()))?;
            let restored = decompress(&payload)?;
            fs::write(&output, &restored)
                .with_context(|| format!("writing {}", output.display()))?;
            println!(
                "{} -> {}: {} bytes restored",
                input.display(),
                output.display(),
                restored.len()
            );
        }
    }
    Ok(())
}
