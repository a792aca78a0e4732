use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexgroup_codec::constants::GROUP_SIZE_ENV_VAR;
use hexgroup_codec::{group_size_from_env_value, BigUint, CodecConfig, HexGroupCodec};

#[derive(Parser)]
#[command(name = "hexgroup")]
#[command(about = "Convert hex strings to integer groups and back")]
struct Cli {
    /// Hex digits per integer (1-32), overrides HEXGROUP_GROUP_SIZE
    #[arg(long, global = true)]
    group_size: Option<u8>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode hex strings into integers
    Encode {
        /// Hex strings; non-hex characters are ignored
        #[arg(allow_hyphen_values = true)]
        hex: Vec<String>,
    },
    /// Decode integers back into hex strings
    Decode {
        /// Decimal integers as printed by `encode`
        integers: Vec<String>,
    },
    /// Print the separator for the configured group size
    Separator,
}

/// Entry point for the hexgroup CLI
///
/// # Environment Variables
/// - `HEXGROUP_GROUP_SIZE`: hex digits per integer (default: 4)
/// - `RUST_LOG`: log filter, logs go to stderr (default: "hexgroup=info,hexgroup_codec=info")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hexgroup=info".parse()?)
                .add_directive("hexgroup_codec=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let group_size = match cli.group_size {
        Some(group_size) => group_size,
        None => group_size_from_env_value(std::env::var(GROUP_SIZE_ENV_VAR).ok())?,
    };
    let codec = CodecConfig::new(group_size)?.build_codec()?;
    tracing::debug!("using group size {}", codec.group_size());

    match cli.command {
        Some(command) => {
            for line in run(&codec, command)? {
                println!("{}", line);
            }
        }
        None => {
            println!("Use 'hexgroup --help' for commands");
        }
    }

    Ok(())
}

/// Runs a subcommand and returns the lines to print.
fn run(codec: &HexGroupCodec, command: Commands) -> anyhow::Result<Vec<String>> {
    match command {
        Commands::Encode { hex } => {
            let integers = codec.encode(&hex);
            let line = integers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            Ok(vec![line])
        }
        Commands::Decode { integers } => {
            let integers = integers
                .iter()
                .map(|value| {
                    value
                        .trim()
                        .parse::<BigUint>()
                        .with_context(|| format!("not a non-negative integer: '{}'", value))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(codec.decode(&integers))
        }
        Commands::Separator => Ok(vec![codec.separator().to_string()]),
    }
}
