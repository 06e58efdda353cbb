use clap::Parser;
use sonarlog::{DecodeOptions, Dialect, TrailingRecord};
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Options {
    /// Path to the SL2 or SL3 file
    input: PathBuf,

    /// Record layout (sl2, sl3 or sl3-short), guessed from the file extension by default
    #[arg(long)]
    dialect: Option<Dialect>,

    /// Treat the last record as a sentinel and drop it
    #[arg(long)]
    drop_last: bool,

    /// Print the whole table as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = Options::parse();

    let dialect = match options.dialect {
        Some(dialect) => dialect,
        None => options
            .input
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(Dialect::from_extension)
            .ok_or_else(|| anyhow::anyhow!("cannot guess dialect, use --dialect"))?,
    };

    let mut decode_options = DecodeOptions::default();
    if options.drop_last {
        decode_options = decode_options.with_trailing(TrailingRecord::DropLast);
    }

    let decoded = sonarlog::decode_file(&options.input, dialect, &decode_options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
        return Ok(());
    }

    let table = &decoded.table;
    println!("Dialect: {}", table.dialect);
    println!("Format: {}", table.header.format);
    println!("Version: {}", table.header.version);
    println!("Block size: {}", table.header.block_size);
    println!("Records: {}", table.len());
    println!("  Iterations: {}", decoded.stats.iterations);
    if let Some(truncated) = decoded.stats.truncated {
        println!("  Truncated: {:?}", truncated);
    }

    let positions = table.positions().unwrap_or_default();

    println!();
    println!("First 5 records:");
    for i in 0..table.len().min(5) {
        let Some(row) = table.row(i) else { break };
        let values: Vec<String> = row
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        println!("  [{}] {}", i, values.join(" "));
        if let Some(position) = positions.get(i) {
            println!(
                "      lat={:.6} lon={:.6} valid={:?}",
                position.latitude,
                position.longitude,
                table.valid.get(i)
            );
        }
    }

    Ok(())
}
