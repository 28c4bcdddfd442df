use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use idencoder_core::{
    Config, DEFAULT_ALPHABET, DEFAULT_BLOCK_SIZE, DEFAULT_MIN_LENGTH, DEFAULT_MODULUS, IdEncoder,
};
use rand::seq::SliceRandom;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "idencoder")]
#[command(about = "Encode integer ids into short, non-sequential strings – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Alphabet used for the encoded ids
    #[arg(short, long, global = true, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Number of low bits that get scrambled
    #[arg(short, long, global = true, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: u32,

    /// Checksum modulus, at most the alphabet length
    #[arg(short, long, global = true, default_value_t = DEFAULT_MODULUS)]
    modulus: u64,

    /// Suppress formatting and instructional output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an integer id
    Encode {
        /// Id to encode
        id: u64,

        /// Minimum length of the encoded body
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        length: usize,
    },

    /// Decode an encoded id back to the integer
    Decode {
        /// Encoded id
        encoded: String,
    },

    /// Run a series of encode/decode cycles over 0..COUNT
    Benchmark {
        /// Number of ids to round-trip
        count: u64,
    },

    /// Print a random permutation of the alphabet
    Random,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(cli.alphabet, cli.block_size, cli.modulus);
    tracing::debug!(?config, "starting cli");

    match cli.command {
        Commands::Encode { id, length } => {
            let encoder = build_encoder(&config)?;
            println!("{}", encoder.encode(id, length));
        }
        Commands::Decode { encoded } => {
            let encoder = build_encoder(&config)?;
            let value = encoder
                .decode_verified(&encoded)
                .with_context(|| format!("Failed to decode '{}'", encoded))?;
            println!("{}", value);
        }
        Commands::Benchmark { count } => {
            let encoder = build_encoder(&config)?;
            cmd_benchmark(&encoder, count, cli.quiet)?;
        }
        Commands::Random => {
            let alphabet = random_alphabet(&config.alphabet);
            if cli.quiet {
                println!("{}", alphabet);
            } else {
                println!("Random alphabet: {}", alphabet);
            }
        }
    }

    Ok(())
}

fn build_encoder(config: &Config) -> Result<IdEncoder> {
    config
        .build()
        .with_context(|| format!("Invalid encoder configuration: {:?}", config))
}

fn cmd_benchmark(encoder: &IdEncoder, count: u64, quiet: bool) -> Result<()> {
    let start = Instant::now();

    for n in 0..count {
        let encoded = encoder.encode(n, DEFAULT_MIN_LENGTH);
        let decoded = encoder
            .decode(&encoded)
            .with_context(|| format!("Failed to decode '{}' (from {})", encoded, n))?;

        if !decoded.checksum_ok || decoded.value != n {
            bail!(
                "round trip mismatch: {} -> '{}' -> {} (checksum {})",
                n,
                encoded,
                decoded.value,
                if decoded.checksum_ok { "OK" } else { "MISMATCH" }
            );
        }
    }

    let elapsed = start.elapsed().as_secs_f64();
    if quiet {
        println!("{:.3}", elapsed);
    } else {
        println!("BENCHMARK: Ran {} iterations in {:.3} seconds", count, elapsed);
    }

    Ok(())
}

/// Shuffle the symbols of `alphabet`. Works on chars so any input stays valid utf-8.
fn random_alphabet(alphabet: &str) -> String {
    let mut symbols: Vec<char> = alphabet.chars().collect();
    symbols.shuffle(&mut rand::rng());
    symbols.into_iter().collect()
}
