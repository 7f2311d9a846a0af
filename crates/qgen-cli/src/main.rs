//! qgen command-line interface
//!
//! Generates algorithm-family quantum circuits and prints them as
//! OpenQASM 2.0 or JSON.
//!
//! ```text
//! qgen generate grover --data '{"num_items": 10}'
//! qgen generate qaoa --seed 7 --format json
//! qgen sizing shor
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::generate::OutputFormat;
use commands::{algorithms, generate, sizing, version};

/// qgen - quantum circuit generation for common algorithm families
#[derive(Parser)]
#[command(name = "qgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a circuit for an algorithm family
    Generate {
        /// Algorithm (bell, grover, shor, vqe, qaoa)
        algorithm: String,

        /// Auxiliary data as JSON, or @FILE to read it from a file
        #[arg(short, long)]
        data: Option<String>,

        /// Seed for the variational angles
        #[arg(short, long, env = "QGEN_SEED")]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "qasm")]
        format: OutputFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Generator config file (JSON)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print the qubit count chosen for an algorithm
    Sizing {
        /// Algorithm identifier
        algorithm: String,

        /// Auxiliary data as JSON, or @FILE to read it from a file
        #[arg(short, long)]
        data: Option<String>,
    },

    /// List supported algorithms
    Algorithms,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the generated document.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Generate {
            algorithm,
            data,
            seed,
            format,
            output,
            config,
        } => generate::execute(
            &algorithm,
            data.as_deref(),
            seed,
            format,
            output.as_deref(),
            config.as_deref(),
        ),

        Commands::Sizing { algorithm, data } => sizing::execute(&algorithm, data.as_deref()),

        Commands::Algorithms => {
            algorithms::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "qgen", "-vv", "generate", "qaoa", "--seed", "7", "--format", "json", "-o", "out.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate {
                algorithm,
                seed,
                format,
                output,
                data,
                ..
            } => {
                assert_eq!(algorithm, "qaoa");
                assert_eq!(seed, Some(7));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(output.as_deref(), Some("out.json"));
                assert!(data.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_defaults_to_qasm() {
        let cli = Cli::try_parse_from(["qgen", "generate", "bell"]).unwrap();
        match cli.command {
            Commands::Generate { format, .. } => assert_eq!(format, OutputFormat::Qasm),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["qgen", "generate", "bell", "--format", "yaml"]).is_err());
        assert!(Cli::try_parse_from(["qgen", "generate"]).is_err());
    }

    #[test]
    fn test_parse_sizing() {
        let cli =
            Cli::try_parse_from(["qgen", "sizing", "grover", "--data", r#"{"num_items":10}"#])
                .unwrap();
        match cli.command {
            Commands::Sizing { algorithm, data } => {
                assert_eq!(algorithm, "grover");
                assert_eq!(data.as_deref(), Some(r#"{"num_items":10}"#));
            }
            _ => panic!("expected sizing"),
        }
    }
}
