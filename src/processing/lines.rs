// Picks MRZ lines out of a raw OCR text dump
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref MRZ_LINE: Regex = Regex::new(r"^[A-Z0-9<]{30,44}$").unwrap();
}

fn clean_mrz_line(line: &str) -> String {
    line.trim_start()
        .to_uppercase()
        .chars()
        .map(|c| match c {
            ' ' | '«' => '<', // OCR reads runs of fillers as spaces or guillemets
            other => other,
        })
        .collect()
}

/// Returns the last block of consecutive MRZ-looking lines that share one length.
///
/// Blank lines are ignored; any other non-matching line ends a block.
pub fn extract_mrz_lines(text: &str) -> Vec<String> {
    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let cleaned = clean_mrz_line(line);
        if !MRZ_LINE.is_match(&cleaned) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        let same_length = current
            .last()
            .map_or(true, |previous| previous.len() == cleaned.len());
        if !same_length {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(cleaned);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    let lines = blocks.pop().unwrap_or_default();
    debug!("Found {} MRZ line(s) in OCR text", lines.len());
    lines
}
