use crate::cmd::InputArgs;
use crate::reports;
use cipherforge::api::{self, CipherForgeState};
use cipherforge::cipher::{CipherKind, SubstitutionMapping};
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::optimizer::ProgressCallback;
use clap::Args;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct BreakArgs {
    #[arg(value_enum)]
    pub cipher: CipherKind,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub config: Config,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_progress(&self, iteration: usize, score: f64, best: &SubstitutionMapping) -> bool {
        debug!("It {:6} | Best: {:.5} | {}", iteration, score, best);
        true
    }
}

pub fn run(args: BreakArgs, state: &CipherForgeState, language: &str, json: bool) -> CfResult<()> {
    let text = args.input.read()?;
    info!("🔎 Breaking {} cipher with '{}' statistics", args.cipher, language);

    let report = api::break_text_with_progress(state, args.cipher, &text, Some(language), &CliLogger)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_break_report(&report);
    }
    Ok(())
}
