//! Find the first occurrence of a byte string in a file
//!
//! ```text
//! cargo run --example find_in_file -- Cargo.toml members
//! cargo run --example find_in_file -- --mmap --start 10 big.log ERROR
//! RUST_LOG=viewbuf=trace cargo run --example find_in_file -- --chunk-size 7 Cargo.toml edition
//! ```

use clap::Parser;
use std::{fs::File, path::PathBuf, time::Instant};
use tracing_subscriber::EnvFilter;
use viewbuf::{Buffer, Chunks, ReadConfig};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Search a file for a byte string using viewbuf buffers")]
struct Cli {
    /// File to search
    path: PathBuf,

    /// Byte string to look for
    needle: String,

    /// First offset to search from
    #[arg(long, default_value_t = 0)]
    start: isize,

    /// Offset to stop searching at (exclusive)
    #[arg(long)]
    end: Option<isize>,

    /// Bytes requested per read when not memory mapping
    #[arg(long, default_value_t = ReadConfig::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Memory-map the file instead of reading it
    #[arg(long)]
    mmap: bool,
}

fn load(cli: &Cli) -> Result<Buffer, Box<dyn std::error::Error>> {
    if cli.mmap {
        return Ok(Buffer::map_file(&cli.path)?);
    }

    let file = File::open(&cli.path)?;
    let config = ReadConfig::default().with_chunk_size(cli.chunk_size);
    Ok(Chunks::new(file, config).concat()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let buf = load(&cli)?;
    tracing::info!(bytes = buf.len(), elapsed = ?start.elapsed(), "loaded file");

    let start = Instant::now();
    match buf.find(cli.needle.as_bytes(), cli.start, cli.end) {
        Some(offset) => println!("{offset}"),
        None => println!("not found"),
    }
    tracing::info!(elapsed = ?start.elapsed(), "search finished");

    Ok(())
}
