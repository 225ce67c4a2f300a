use crate::cmd::InputArgs;
use cipherforge::cipher::{caesar, vigenere, CipherKind, SubstitutionMapping};
use cipherforge::error::{CfResult, CipherForgeError};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    #[arg(value_enum)]
    pub cipher: CipherKind,

    /// Shift (caesar), keyword (vigenere) or 26-letter key (substitution)
    #[arg(short, long)]
    pub key: String,

    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: TransformArgs, decrypt: bool) -> CfResult<()> {
    let text = args.input.read()?;
    println!("{}", apply(args.cipher, &args.key, &text, decrypt)?);
    Ok(())
}

fn apply(cipher: CipherKind, key: &str, text: &str, decrypt: bool) -> CfResult<String> {
    match cipher {
        CipherKind::Caesar => {
            let shift: usize = key.trim().parse().map_err(|_| {
                CipherForgeError::Validation(format!("Caesar shift must be a number, got '{}'", key))
            })?;
            Ok(if decrypt {
                caesar::decrypt(text, shift)
            } else {
                caesar::encrypt(text, shift)
            })
        }
        CipherKind::Vigenere => {
            if vigenere::key_shifts(key).is_empty() {
                return Err(CipherForgeError::Validation(
                    "Vigenère key needs at least one letter".to_string(),
                ));
            }
            Ok(if decrypt {
                vigenere::decrypt(text, key)
            } else {
                vigenere::encrypt(text, key)
            })
        }
        CipherKind::Substitution => {
            let mapping = SubstitutionMapping::from_key(key)?;
            Ok(if decrypt {
                mapping.apply(text)
            } else {
                mapping.encrypt(text)
            })
        }
    }
}
