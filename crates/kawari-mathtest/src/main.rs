//! Kawari math test runner binary.
//!
//! Runs the math suites against a simulated Kawari, executes single
//! operations, or prints the extension register map.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use kawari::Opcode;
use kawari::registers::EXTENSION_REGISTERS;
use kawari_mathtest::exec::{self, parse_operand};
use kawari_mathtest::{EXIT_CONFIG_ERROR, MathTestConfig, runner};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kawari-mathtest")]
#[command(version)]
#[command(about = "Test runner for the Kawari math co-processor")]
struct Cli {
    /// Log register traffic (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the math suites against a simulated Kawari
    Run {
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Random operand pairs per suite (overrides config)
        #[arg(short, long)]
        runs: Option<u32>,
        /// RNG seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Execute one operation and print the result and status
    Exec {
        /// Operand 1, -32768..=65535 (decimal, $hex or 0xhex)
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        op1: u16,
        /// Operand 2, same range as operand 1
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        op2: u16,
        /// Opcode mnemonic (sadd, umult, ...)
        opcode: Opcode,
        /// Also show the operand 1 pair (product high word / remainder)
        #[arg(short, long)]
        wide: bool,
    },
    /// Print the math and extension register map
    Regs,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            runs,
            seed,
            json,
        } => run(config, runs, seed, json),
        Commands::Exec {
            op1,
            op2,
            opcode,
            wide,
        } => println!("{}", exec::execute(op1, op2, opcode, wide)),
        Commands::Regs => regs(),
    }
}

fn run(config: Option<PathBuf>, runs: Option<u32>, seed: Option<u64>, json: bool) {
    let report = match MathTestConfig::resolve(config.as_deref(), runs, seed)
        .and_then(|config| runner::run(&config))
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Config error: {e}");
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Report error: {e}");
                process::exit(EXIT_CONFIG_ERROR);
            }
        }
    } else {
        println!("{report}");
    }

    process::exit(report.exit_code());
}

fn regs() {
    for (name, addr) in EXTENSION_REGISTERS {
        println!("${addr:04X}  {name}");
    }
    println!();
    for op in Opcode::ALL {
        println!("{:>3}  {op}", op.code());
    }
}
