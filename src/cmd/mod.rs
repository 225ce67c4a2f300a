pub mod analyze;
pub mod break_cmd;
pub mod transform;

use cipherforge::error::CfResult;
use clap::Args;
use std::fs;
use std::io::{self, Read};

/// Where the text comes from: --text, --input, or stdin.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<String>,
}

impl InputArgs {
    pub fn read(&self) -> CfResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return Ok(fs::read_to_string(path)?);
        }
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf.trim_end_matches(['\n', '\r']).to_string())
    }
}
