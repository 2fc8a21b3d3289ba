use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use vast_codec::async_api;
use vast_codec::fetch;

/// VAST 4.2 decoder and formatter
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a VAST file or URL and print the document model
    Parse {
        /// Path to the VAST file or URL
        #[arg(short, long)]
        input: String,

        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,

        /// Print the model as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a VAST file or URL and write it back in canonical form
    Format {
        /// Path to the VAST file or URL
        #[arg(short, long)]
        input: String,

        /// Output file path (if not specified, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse {
            input,
            pretty,
            json,
        } => {
            let content = fetch::fetch_vast_content(input).await?;
            let vast = async_api::from_slice(&content).await?;

            match (*json, *pretty) {
                (true, true) => println!("{}", serde_json::to_string_pretty(&vast)?),
                (true, false) => println!("{}", serde_json::to_string(&vast)?),
                (false, true) => println!("{:#?}", vast),
                (false, false) => println!("{:?}", vast),
            }
        }
        Commands::Format { input, output } => {
            let content = fetch::fetch_vast_content(input).await?;
            let vast = async_api::from_slice(&content).await?;
            let xml = async_api::to_xml_string(&vast).await?;

            if let Some(output_path) = output {
                tokio::fs::write(output_path, &xml).await?;
                info!("Formatted VAST written to {}", output_path.display());
            } else {
                println!("{}", xml);
            }
        }
    }

    Ok(())
}
