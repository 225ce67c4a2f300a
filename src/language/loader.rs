use crate::error::{CfResult, CipherForgeError};
use crate::stats::FrequencyTable;
use crate::text::letter_index;
use std::io::Read;
use tracing::{debug, warn};

/// Reads `letter,percent` rows. Blank lines and `#` comments are skipped;
/// malformed rows are counted and dropped.
pub fn load_letter_frequencies<R: Read>(reader: R) -> CfResult<FrequencyTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = FrequencyTable::default();
    let mut loaded = 0;
    let mut skipped_count = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
                skipped_count += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped_count += 1;
            continue;
        }

        let idx = match rec[0].chars().next().and_then(letter_index) {
            Some(i) => i,
            None => {
                skipped_count += 1;
                continue;
            }
        };

        let value: f64 = match rec[1].parse() {
            Ok(v) if v >= 0.0 => v,
            _ => {
                skipped_count += 1;
                continue;
            }
        };

        table.set(idx, value);
        loaded += 1;
    }

    if skipped_count > 0 {
        debug!("Skipped {} invalid rows in frequency file.", skipped_count);
    }

    if loaded == 0 {
        return Err(CipherForgeError::Validation(
            "Frequency file contained no usable letter rows".to_string(),
        ));
    }

    debug!("Loaded {} letter frequencies.", loaded);
    Ok(table)
}
