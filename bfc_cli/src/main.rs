use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use bfc_codecs::default_registry;
use bfc_core::{report, BatchResult, Codec, CompressOptions, DecompressOptions};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "bfc",
    about = "Batch file compressor — compress or decompress every file in a folder, individually",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress every matching file in a folder
    Compress {
        /// Folder containing the files to compress
        #[arg(long)]
        folder: PathBuf,
        /// Algorithm: lzma | zstd | gzip
        #[arg(long = "alg", default_value = "zstd")]
        algorithm: String,
        /// Compression level (defaults to the algorithm's own default)
        #[arg(long)]
        level: Option<u32>,
        /// Glob filter on file names, e.g. "*.csv"
        #[arg(long, default_value = "*")]
        pattern: String,
        /// Keep the originals; pass --keep-originals=false to delete each
        /// one once its compressed file is on disk
        #[arg(long, action = ArgAction::Set, default_value_t = true,
              default_missing_value = "true", num_args = 0..=1)]
        keep_originals: bool,
        /// Overwrite existing destination files
        #[arg(long)]
        force: bool,
    },
    /// Decompress every recognized compressed file in a folder
    Decompress {
        /// Folder containing the compressed files
        #[arg(long)]
        folder: PathBuf,
        /// Destination folder for the decompressed files
        #[arg(long)]
        output: PathBuf,
        /// Only pick up files carrying this algorithm's extension
        #[arg(long = "alg")]
        algorithm: Option<String>,
        /// Keep the compressed files; pass --keep-compressed=false to
        /// delete each one after successful decompression
        #[arg(long, action = ArgAction::Set, default_value_t = true,
              default_missing_value = "true", num_args = 0..=1)]
        keep_compressed: bool,
        /// Overwrite existing destination files
        #[arg(long)]
        force: bool,
    },
    /// List registered algorithms, their extensions, levels, and availability
    List,
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_compress(
    folder: PathBuf,
    algorithm: &str,
    level: Option<u32>,
    pattern: &str,
    keep_originals: bool,
    force: bool,
) -> anyhow::Result<BatchResult> {
    let registry = default_registry();
    let opts = CompressOptions {
        level,
        keep_original: keep_originals,
        overwrite: force,
    };
    let batch = bfc_core::compress_folder(&registry, &folder, algorithm, pattern, &opts)
        .with_context(|| format!("compressing folder {:?}", folder))?;
    print!("{}", report::render(&batch, "Compression"));
    Ok(batch)
}

fn run_decompress(
    folder: PathBuf,
    output: PathBuf,
    algorithm: Option<&str>,
    keep_compressed: bool,
    force: bool,
) -> anyhow::Result<BatchResult> {
    let registry = default_registry();
    let opts = DecompressOptions {
        keep_compressed,
        overwrite: force,
    };
    let batch = bfc_core::decompress_folder(&registry, &folder, &output, algorithm, &opts)
        .with_context(|| format!("decompressing folder {:?}", folder))?;
    print!("{}", report::render(&batch, "Decompression"));
    Ok(batch)
}

fn run_list() {
    for codec in default_registry().list() {
        let levels = codec.levels();
        let availability = if codec.is_available() {
            "available"
        } else {
            "UNAVAILABLE (backend not compiled in)"
        };
        println!(
            "  {:<5} {:<5} levels {}-{} (default {})  {}",
            codec.name(),
            codec.extension(),
            levels.min,
            levels.max,
            levels.default,
            availability
        );
    }
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Compress {
            folder,
            algorithm,
            level,
            pattern,
            keep_originals,
            force,
        } => run_compress(folder, &algorithm, level, &pattern, keep_originals, force),
        Commands::Decompress {
            folder,
            output,
            algorithm,
            keep_compressed,
            force,
        } => run_decompress(
            folder,
            output,
            algorithm.as_deref(),
            keep_compressed,
            force,
        ),
        Commands::List => {
            run_list();
            return ExitCode::SUCCESS;
        }
    };

    // Exit 0 only when every file operation in the batch succeeded.
    match outcome {
        Ok(batch) if batch.all_succeeded() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
