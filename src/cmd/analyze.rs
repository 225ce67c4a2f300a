use crate::cmd::InputArgs;
use crate::reports;
use cipherforge::api::{self, CipherForgeState};
use cipherforge::error::CfResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: AnalyzeArgs, state: &CipherForgeState, language: &str, json: bool) -> CfResult<()> {
    let text = args.input.read()?;
    let report = api::analyze_text(state, &text, Some(language))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_frequency_report(&report);
    }
    Ok(())
}
