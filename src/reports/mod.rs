use cipherforge::api::{BreakReport, FrequencyReport};
use cipherforge::cipher::Key;
use cipherforge::keylength::KeyLengthReport;
use cipherforge::solvers::{SolveStatus, SolverResult};
use cipherforge::text::{index_to_letter, preview};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const PREVIEW_CHARS: usize = 60;
const KEY_LENGTH_ROWS: usize = 10;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn confidence_cell(confidence: f64) -> Cell {
    let text = format!("{:.1}", confidence);
    if confidence >= 75.0 {
        Cell::new(text).fg(Color::Green)
    } else if confidence >= 50.0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text).fg(Color::Red)
    }
}

fn status_cell(status: SolveStatus) -> Cell {
    let cell = Cell::new(status.to_string());
    match status {
        SolveStatus::Solved => cell.fg(Color::Green),
        SolveStatus::InvalidInput => cell.fg(Color::Red),
        SolveStatus::InsufficientEvidence => cell.fg(Color::Yellow),
    }
}

pub fn print_frequency_report(r: &FrequencyReport) {
    let mut summary = new_table();
    summary.add_row(vec![
        Cell::new("Letters").add_attribute(Attribute::Bold),
        Cell::new(r.letters),
    ]);
    summary.add_row(vec![
        Cell::new("Index of coincidence"),
        Cell::new(format!("{:.4} (reference {:.4})", r.index_of_coincidence, r.reference_ic)),
    ]);
    summary.add_row(vec![
        Cell::new(format!("Chi-squared vs {}", r.language)),
        Cell::new(format!("{:.2}", r.chi_squared)),
    ]);
    summary.add_row(vec![
        Cell::new("Fitness"),
        Cell::new(format!("{:.5}", r.fitness.fitness)).fg(Color::Cyan),
    ]);
    if let Some(guess) = &r.detected {
        summary.add_row(vec![
            Cell::new("Detected language"),
            Cell::new(format!("{} ({:.1}%)", guess.language, guess.confidence * 100.0)),
        ]);
    }
    println!("\n{}", summary);

    let mut letters = new_table();
    letters.add_row(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Observed %").fg(Color::Cyan),
        Cell::new("Bar"),
    ]);
    for (c, pct) in r.ranked.iter().filter(|(_, p)| *p > 0.0) {
        letters.add_row(vec![
            Cell::new(c).set_alignment(CellAlignment::Center),
            Cell::new(format!("{:.2}", pct)),
            Cell::new("#".repeat((*pct).round() as usize)),
        ]);
    }
    right_align(&mut letters, 1..=1);
    println!("\n{}", letters);

    let mut grams = new_table();
    grams.add_row(vec![
        Cell::new("Bigram").add_attribute(Attribute::Bold),
        Cell::new("%"),
        Cell::new("Trigram").add_attribute(Attribute::Bold),
        Cell::new("%"),
    ]);
    let rows = r.bigrams.len().max(r.trigrams.len());
    for i in 0..rows {
        let (b, bp) = r
            .bigrams
            .get(i)
            .map(|(g, p)| (g.clone(), format!("{:.2}", p)))
            .unwrap_or_default();
        let (t, tp) = r
            .trigrams
            .get(i)
            .map(|(g, p)| (g.clone(), format!("{:.2}", p)))
            .unwrap_or_default();
        grams.add_row(vec![Cell::new(b), Cell::new(bp), Cell::new(t), Cell::new(tp)]);
    }
    right_align(&mut grams, 1..=1);
    right_align(&mut grams, 3..=3);
    println!("\n{}", grams);
}

pub fn print_break_report(r: &BreakReport) {
    print_result(&r.result, &r.language);

    if let Key::Mapping(mapping) = &r.result.key {
        let mut table = new_table();
        let mut cipher_row = vec![Cell::new("Cipher").add_attribute(Attribute::Bold)];
        let mut plain_row = vec![Cell::new("Plain").add_attribute(Attribute::Bold)];
        for i in 0..26 {
            cipher_row.push(Cell::new(index_to_letter(i)));
            plain_row.push(Cell::new(index_to_letter(mapping.plain_for(i))).fg(Color::Cyan));
        }
        table.add_row(cipher_row);
        table.add_row(plain_row);
        println!("\n{}", table);
    }

    if let Some(lengths) = &r.key_lengths {
        print_key_length_report(lengths);
    }

    if !r.alternatives.is_empty() {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Key"),
            Cell::new("Score").fg(Color::Cyan),
            Cell::new("Plaintext"),
        ]);
        for (i, c) in r.alternatives.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&c.key),
                Cell::new(format!("{:.5}", c.score)),
                Cell::new(preview(&c.plaintext, PREVIEW_CHARS)),
            ]);
        }
        right_align(&mut table, 2..=2);
        println!("\n{}", table);
    }
}

fn print_result(result: &SolverResult, language: &str) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Cipher").add_attribute(Attribute::Bold),
        Cell::new(result.cipher),
    ]);
    table.add_row(vec![Cell::new("Language"), Cell::new(language)]);
    table.add_row(vec![Cell::new("Status"), status_cell(result.status)]);
    table.add_row(vec![Cell::new("Key"), Cell::new(&result.key).fg(Color::Cyan)]);
    table.add_row(vec![
        Cell::new("Score"),
        Cell::new(format!("{:.5}", result.score)),
    ]);
    table.add_row(vec![Cell::new("Confidence"), confidence_cell(result.confidence)]);
    table.add_row(vec![
        Cell::new("Elapsed"),
        Cell::new(format!("{:.1} ms", result.elapsed.as_secs_f64() * 1000.0)),
    ]);
    if result.history.len() > 1 {
        table.add_row(vec![
            Cell::new("Improvements"),
            Cell::new(result.history.len() - 1),
        ]);
    }
    println!("\n{}", table);

    if !result.plaintext.is_empty() {
        println!("\n{}", result.plaintext);
    }
}

pub fn print_key_length_report(r: &KeyLengthReport) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Length").add_attribute(Attribute::Bold),
        Cell::new("Kasiski"),
        Cell::new("IC"),
        Cell::new("Combined").fg(Color::Cyan),
    ]);
    for c in r.ranked.iter().take(KEY_LENGTH_ROWS) {
        table.add_row(vec![
            Cell::new(c.length),
            Cell::new(format!("{:.3}", c.kasiski)),
            Cell::new(format!("{:.4}", c.coincidence)),
            Cell::new(format!("{:.4}", c.combined)),
        ]);
    }
    right_align(&mut table, 0..=3);
    println!(
        "\nKey length candidates ({} repeated substrings)\n{}",
        r.repeated_substrings, table
    );
}
