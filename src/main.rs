use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
mod config;
mod deck;
mod error;
mod fetch;
mod tcg;
mod utils;

/// Download Scryfall card images for every card in a folder of Forge decks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up every card of every deck and save its images
    Fetch {
        /// Directory containing .dck files (defaults to Forge's commander decks)
        #[arg(short, long, env = "DECK_FETCH_DECKS")]
        decks: Option<PathBuf>,

        /// Directory to save images to (defaults to Forge's card picture cache)
        #[arg(short, long, env = "DECK_FETCH_OUTPUT")]
        output: Option<PathBuf>,

        /// Log and skip failed image downloads instead of stopping the run
        #[arg(long, default_value_t = false)]
        guard_downloads: bool,
    },
    /// Print the card names parsed from each deck without downloading anything
    List {
        /// Directory containing .dck files (defaults to Forge's commander decks)
        #[arg(short, long, env = "DECK_FETCH_DECKS")]
        decks: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("deck_fetch={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(command: Commands) -> error::Result<()> {
    match command {
        Commands::Fetch {
            decks,
            output,
            guard_downloads,
        } => {
            let mut config = config::FetchConfig::new(decks, output)?;
            config.guard_downloads = guard_downloads;

            println!("Decks: {}", config.deck_dir.display());
            println!("Output: {}", config.output_dir.display());

            let stats = fetch::fetch_decks(&config).await?;
            stats.print_summary();
        }
        Commands::List { decks } => {
            let deck_dir = config::resolve_deck_dir(decks)?;
            for (path, names) in fetch::list_decks(&deck_dir)? {
                println!("{}", path.display());
                for name in names {
                    println!("  - {}", name);
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
