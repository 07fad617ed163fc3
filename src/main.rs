//! pow512 CLI
//!
//! A command-line tool for mining and checking SHA-512 proofs of work.
//!
//! # Commands
//!
//! - `mine` - Search for a proof over some data
//! - `verify` - Check a proof against the data it was mined for
//! - `benchmark` - Measure digest throughput

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use pow512::algorithm::{
    digest_hex, mine_parallel, Miner, PayloadBuffer, RngNonceSource, SystemClock, Verifier,
};
use pow512::{check_json, PowConfig};

#[derive(Parser)]
#[command(name = "pow512")]
#[command(author = "Cyberia")]
#[command(version = "0.1.0")]
#[command(about = "SHA-512 leading-zero proof-of-work miner and verifier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct DataSource {
    /// The data as a UTF-8 string
    #[arg(long)]
    data: Option<String>,

    /// Read the data from a file
    #[arg(long)]
    data_file: Option<PathBuf>,
}

impl DataSource {
    fn read(&self) -> anyhow::Result<Vec<u8>> {
        match (&self.data, &self.data_file) {
            (Some(text), _) => Ok(text.as_bytes().to_vec()),
            (None, Some(path)) => Ok(fs::read(path)?),
            (None, None) => anyhow::bail!("Either --data or --data-file is required"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Mine a proof of work
    Mine {
        #[command(flatten)]
        source: DataSource,

        /// Required leading zero hex characters
        #[arg(short, long)]
        difficulty: Option<i32>,

        /// Number of threads to use (default: number of CPU cores)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Give up after this many hashes
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Seed the nonce generator for a reproducible single-threaded search
        #[arg(long)]
        seed: Option<u64>,

        /// Also write the proof JSON to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Verify a proof of work
    Verify {
        #[command(flatten)]
        source: DataSource,

        /// Proof JSON file ("-" for stdin)
        #[arg(long)]
        proof: PathBuf,

        /// Maximum proof age in seconds
        #[arg(long)]
        max_age: Option<u64>,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of hashes to compute
        #[arg(short, long, default_value = "100000")]
        count: u32,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = PowConfig::load_or_default(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| match cli.command {
            Commands::Mine {
                source,
                difficulty,
                threads,
                max_attempts,
                timeout,
                seed,
                out,
            } => {
                let config = PowConfig {
                    difficulty: difficulty.unwrap_or(config.difficulty),
                    max_attempts: max_attempts.or(config.max_attempts),
                    timeout_secs: timeout.or(config.timeout_secs),
                    threads: threads.or(config.threads),
                    ..config
                };
                cmd_mine(&source, &config, seed, out.as_deref())
            }
            Commands::Verify {
                source,
                proof,
                max_age,
            } => {
                let config = PowConfig {
                    max_age_secs: max_age.unwrap_or(config.max_age_secs),
                    ..config
                };
                cmd_verify(&source, &proof, &config)
            }
            Commands::Benchmark { count } => cmd_benchmark(count),
        });

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn cmd_mine(
    source: &DataSource,
    config: &PowConfig,
    seed: Option<u64>,
    out: Option<&Path>,
) -> anyhow::Result<bool> {
    let data = source.read()?;
    let limits = config.limits();
    let num_threads = config.threads.unwrap_or_else(num_cpus::get).max(1);

    eprintln!("Mining {} bytes", data.len());
    eprintln!("Difficulty: {} leading zeros", config.difficulty);

    let start = Instant::now();
    let proof = match seed {
        Some(seed) => {
            eprintln!("Seed: {} (single thread)", seed);
            let mut miner = Miner::with_parts(RngNonceSource::seeded(seed), SystemClock)
                .with_limits(limits);
            let proof = miner.mine(&data, config.difficulty)?;
            report_rate(miner.attempts(), start.elapsed());
            proof
        }
        None if num_threads == 1 => {
            eprintln!("Threads: 1");
            let mut miner = Miner::new().with_limits(limits);
            let proof = miner.mine(&data, config.difficulty)?;
            report_rate(miner.attempts(), start.elapsed());
            proof
        }
        None => {
            eprintln!("Threads: {}", num_threads);
            let proof = mine_parallel(&data, config.difficulty, num_threads, &limits)?;
            eprintln!("Time: {:.2}s", start.elapsed().as_secs_f64());
            proof
        }
    };

    let json = serde_json::to_string_pretty(&proof)?;
    println!("{}", json);

    if let Some(path) = out {
        fs::write(path, &json)?;
        eprintln!("Saved to: {}", path.display());
    }

    Ok(true)
}

fn report_rate(attempts: u64, elapsed: Duration) {
    let secs = elapsed.as_secs_f64();
    let hashrate = if secs > 0.0 { attempts as f64 / secs } else { 0.0 };
    eprintln!(
        "Hashes: {} | Time: {:.2}s | Hashrate: {:.0} H/s",
        attempts, secs, hashrate
    );
}

fn cmd_verify(source: &DataSource, proof_path: &Path, config: &PowConfig) -> anyhow::Result<bool> {
    let data = source.read()?;

    let content = if proof_path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input
    } else {
        fs::read_to_string(proof_path)?
    };

    match check_json(&Verifier::new(), &data, &content, config.max_age()) {
        Ok(_) => {
            println!("valid");
            Ok(true)
        }
        Err(reason) => {
            println!("invalid: {}", reason);
            Ok(false)
        }
    }
}

fn cmd_benchmark(count: u32) -> anyhow::Result<bool> {
    println!("Running benchmark with {} hashes...", count);

    let mut payload = PayloadBuffer::new(b"benchmark input data for sha512 proof of work", 0);

    let start = Instant::now();

    for i in 0..count {
        payload.set_nonce(i64::from(i));
        let _ = digest_hex(payload.as_bytes());
    }

    let elapsed = start.elapsed();
    let hashrate = count as f64 / elapsed.as_secs_f64();

    println!("\nResults:");
    println!("  Total hashes: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Hashrate: {:.2} H/s", hashrate);

    // Expected work per difficulty at this rate
    println!("\nExpected time per proof:");
    for leading_zeros in 1..=6u32 {
        let expected = 16f64.powi(leading_zeros as i32) / hashrate;
        println!("  {} zeros: {:.3}s", leading_zeros, expected);
    }

    Ok(true)
}
