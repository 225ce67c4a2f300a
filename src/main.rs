use cipherforge::api::{self, CipherForgeState};
use cipherforge::config::Config;
use cipherforge::language::DEFAULT_LANGUAGE;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// CSV of `letter,percent` rows registered under --language
    #[arg(global = true, long)]
    language_file: Option<String>,

    /// JSON config; flags typed on the command line still win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, short, long, default_value_t = false)]
    verbose: bool,

    #[arg(global = true, long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Letter statistics of a text
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Recover the plaintext of a Caesar, substitution or Vigenère ciphertext
    Break(cmd::break_cmd::BreakArgs),
    Encrypt(cmd::transform::TransformArgs),
    Decrypt(cmd::transform::TransformArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // stdout carries results; logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.command {
        Commands::Break(args) => match (&cli.config, matches.subcommand_matches("break")) {
            (Some(path), Some(sub_matches)) => {
                info!("📂 Loading config: {}", path);
                let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                    error!("{}", e);
                    process::exit(1);
                });
                file_config.merge_from_cli(&args.config, sub_matches);
                file_config
            }
            _ => args.config.clone(),
        },
        _ => Config::default(),
    };

    let state = CipherForgeState::with_config(config);

    if let Some(path) = &cli.language_file {
        match api::load_language(&state, &cli.language, path) {
            Ok(msg) => info!("🔤 {}", msg),
            Err(e) => {
                error!("Failed to load language file {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &state, &cli.language, cli.json),
        Commands::Break(args) => cmd::break_cmd::run(args, &state, &cli.language, cli.json),
        Commands::Encrypt(args) => cmd::transform::run(args, false),
        Commands::Decrypt(args) => cmd::transform::run(args, true),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
