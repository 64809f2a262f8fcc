//! pip-cli - Command-line interface for PipLib
//!
//! A command-line tool for compressing and decompressing files with the
//! Huffman and LZW codecs of the PIP format.

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use piplib::archive::{
    huffman_compress_file, huffman_decompress_file, lzw_compress_file, lzw_decompress_file,
    read_input, with_extension, DECOMPRESSED_EXT, HUFF_DATA_EXT, HUFF_TABLE_EXT, LZW_DATA_EXT,
};
use piplib::huffman::FrequencyTable;
use piplib::{CodeWidth, CompressionStats};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pip-cli")]
#[command(about = "A CLI tool for PIP Huffman and LZW compression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output file (default: input with the codec extension)
        output: Option<PathBuf>,

        /// Codec to use
        #[arg(short, long, value_enum, default_value_t = CliCodec::Huffman)]
        codec: CliCodec,

        /// Frequency-table output for the Huffman codec
        /// (default: input with the table extension)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// LZW code width in bits (8-24)
        #[arg(short, long, default_value_t = 18)]
        width: u8,

        /// Force overwrite of output files
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress a file
    Decompress {
        /// Input compressed file
        input: PathBuf,

        /// Output decompressed file (default: input with the 'out' extension)
        output: Option<PathBuf>,

        /// Codec to use (default: inferred from the input extension)
        #[arg(short, long, value_enum)]
        codec: Option<CliCodec>,

        /// Frequency-table file for the Huffman codec
        /// (default: input with the table extension)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// LZW code width in bits, matching the value used to compress
        #[arg(short, long, default_value_t = 18)]
        width: u8,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Inspect a Huffman frequency-table file
    Info {
        /// Frequency-table file to analyze
        input: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum CliCodec {
    /// Static Huffman entropy coder (writes a table companion file)
    Huffman,
    /// Adaptive-dictionary LZW coder (self-describing stream)
    Lzw,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
            table,
            width,
            force,
        } => compress_file(
            &input,
            output.as_deref(),
            codec,
            table.as_deref(),
            width,
            force,
            cli.verbose,
            cli.quiet,
        ),
        Commands::Decompress {
            input,
            output,
            codec,
            table,
            width,
            force,
        } => decompress_file(
            &input,
            output.as_deref(),
            codec,
            table.as_deref(),
            width,
            force,
            cli.verbose,
            cli.quiet,
        ),
        Commands::Info { input } => show_table_info(&input, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Infer the codec from a compressed file's extension
fn infer_codec(input: &Path) -> Option<CliCodec> {
    match input.extension()?.to_str()? {
        HUFF_DATA_EXT => Some(CliCodec::Huffman),
        LZW_DATA_EXT => Some(CliCodec::Lzw),
        _ => None,
    }
}

fn check_overwrite(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            path.display()
        )
        .into());
    }
    Ok(())
}

fn progress_for(len: usize, quiet: bool, message: &'static str) -> Option<ProgressBar> {
    if quiet || len <= 1024 * 1024 {
        return None;
    }
    let pb = ProgressBar::new(2);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message);
    Some(pb)
}

#[allow(clippy::too_many_arguments)]
fn compress_file(
    input: &Path,
    output: Option<&Path>,
    codec: CliCodec,
    table: Option<&Path>,
    width: u8,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let default_output = with_extension(
        input,
        match codec {
            CliCodec::Huffman => HUFF_DATA_EXT,
            CliCodec::Lzw => LZW_DATA_EXT,
        },
    );
    let output = output.map(Path::to_path_buf).unwrap_or(default_output);
    check_overwrite(&output, force)?;

    let input_size = std::fs::metadata(input)?.len() as usize;
    if verbose {
        println!("Compressing '{}' to '{}'", input.display(), output.display());
        println!("Input size: {} bytes", input_size);
    }

    let progress = progress_for(input_size, quiet, "Compressing...");
    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let start_time = Instant::now();
    let stats = match codec {
        CliCodec::Huffman => {
            let table_out = table
                .map(Path::to_path_buf)
                .unwrap_or_else(|| with_extension(input, HUFF_TABLE_EXT));
            check_overwrite(&table_out, force)?;
            if verbose {
                println!("Frequency table: '{}'", table_out.display());
            }
            huffman_compress_file(input, &output, &table_out)?
        }
        CliCodec::Lzw => lzw_compress_file(input, &output, CodeWidth::new(width)?)?,
    };

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Compression complete");
    }

    report("Compression", stats, start_time, quiet);
    if !quiet && stats.ratio() > 1.0 {
        println!("  Note: File expanded during compression (common for small/random data)");
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn decompress_file(
    input: &Path,
    output: Option<&Path>,
    codec: Option<CliCodec>,
    table: Option<&Path>,
    width: u8,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let codec = codec.or_else(|| infer_codec(input)).ok_or_else(|| {
        format!(
            "Cannot infer codec from '{}'; pass --codec huffman or --codec lzw",
            input.display()
        )
    })?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| with_extension(input, DECOMPRESSED_EXT));
    check_overwrite(&output, force)?;

    let input_size = std::fs::metadata(input)?.len() as usize;
    if verbose {
        println!(
            "Decompressing '{}' to '{}'",
            input.display(),
            output.display()
        );
        println!("Compressed size: {} bytes", input_size);
    }

    let progress = progress_for(input_size, quiet, "Decompressing...");
    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let start_time = Instant::now();
    let stats = match codec {
        CliCodec::Huffman => {
            let table_in = table
                .map(Path::to_path_buf)
                .unwrap_or_else(|| with_extension(input, HUFF_TABLE_EXT));
            huffman_decompress_file(input, &table_in, &output)?
        }
        CliCodec::Lzw => lzw_decompress_file(input, &output, CodeWidth::new(width)?)?,
    };

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Decompression complete");
    }

    report("Decompression", stats, start_time, quiet);
    Ok(())
}

fn report(operation: &str, stats: CompressionStats, start_time: Instant, quiet: bool) {
    if quiet {
        return;
    }
    println!("✓ {} successful!", operation);
    println!("  Input:  {} bytes", stats.input_bytes);
    println!("  Output: {} bytes", stats.output_bytes);
    println!("  Ratio:  {:.1}%", stats.ratio() * 100.0);
    println!("  Time:   {:.2?}", start_time.elapsed());
}

fn show_table_info(input: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let blob = read_input(input)?;
    let (table, total_bits) = FrequencyTable::parse(&blob)?;

    let original_bytes = table.total_count();
    println!("PIP Frequency Table Information:");
    println!("  File: {}", input.display());
    println!("  Size: {} bytes", blob.len());
    println!("  Distinct symbols: {}", table.len());
    println!("  Original size: {} bytes", original_bytes);
    println!("  Encoded stream: {} bits", total_bits);
    if original_bytes > 0 {
        let ratio = total_bits as f64 / (original_bytes as f64 * 8.0) * 100.0;
        println!("  Huffman ratio: {:.1}%", ratio);
    }

    if verbose {
        for entry in table.entries() {
            let symbol = entry.symbol as char;
            if symbol.is_ascii_graphic() || symbol == ' ' {
                println!("  '{}' x {}", symbol, entry.count);
            } else {
                println!("  {:#04x} x {}", entry.symbol, entry.count);
            }
        }
    }

    Ok(())
}
