// OCR confusion handling for MRZ text: direct correction when the expected
// content of a field is known, combinatorial search when only a check digit
// can tell which reading is right.

use std::collections::HashMap;
use lazy_static::lazy_static;
use log::{debug, warn};
use crate::models::ContentType;

lazy_static! {
    // Letters OCR commonly reads in place of digits
    static ref DIGIT_CORRECTIONS: HashMap<char, char> = {
        let mut m = HashMap::new();
        m.insert('O', '0');
        m.insert('Q', '0');
        m.insert('U', '0');
        m.insert('D', '0');
        m.insert('I', '1');
        m.insert('Z', '2');
        m.insert('B', '8');
        m
    };

    // Digits OCR commonly reads in place of letters
    static ref LETTER_CORRECTIONS: HashMap<char, char> = {
        let mut m = HashMap::new();
        m.insert('0', 'O');
        m.insert('1', 'I');
        m.insert('2', 'Z');
        m.insert('8', 'B');
        m
    };
}

/// A character that may be replaced during the search, with its replacements in table order.
struct Branch {
    line: usize,
    index: usize,
    replacements: Vec<char>,
}

pub struct OcrCorrector;

impl OcrCorrector {
    pub fn correct_digit(c: char) -> char {
        DIGIT_CORRECTIONS.get(&c).copied().unwrap_or(c)
    }

    pub fn correct_letter(c: char) -> char {
        LETTER_CORRECTIONS.get(&c).copied().unwrap_or(c)
    }

    fn correct_sex_marker(c: char) -> char {
        match c {
            'P' => 'F',
            other => other,
        }
    }

    /// Rewrites every character towards the expected content. Mixed content is left untouched.
    pub fn correct(value: &str, content_type: ContentType) -> String {
        match content_type {
            ContentType::Digits => value.chars().map(Self::correct_digit).collect(),
            ContentType::Letters => value.chars().map(Self::correct_letter).collect(),
            ContentType::SexMarker => value.chars().map(Self::correct_sex_marker).collect(),
            ContentType::Mixed => value.to_string(),
        }
    }

    /// The original character followed by its digit and letter readings, without duplicates.
    pub fn candidates(c: char) -> Vec<char> {
        let mut candidates = vec![c];
        for alternate in [Self::correct_digit(c), Self::correct_letter(c)] {
            if !candidates.contains(&alternate) {
                candidates.push(alternate);
            }
        }
        candidates
    }

    /// Searches the character-wise substitutions of `strings` for a combination
    /// accepted by `predicate`.
    ///
    /// Combinations with fewer substitutions are tried first; among those, the
    /// ones touching leftmost positions come first. `strings` itself is the first
    /// combination evaluated. At most `limit` combinations are evaluated.
    pub fn find_matching_strings<F>(
        strings: &[String],
        limit: usize,
        mut predicate: F,
    ) -> Option<Vec<String>>
    where
        F: FnMut(&[String]) -> bool,
    {
        let original: Vec<Vec<char>> = strings.iter().map(|s| s.chars().collect()).collect();

        let mut branches = Vec::new();
        for (line, chars) in original.iter().enumerate() {
            for (index, c) in chars.iter().enumerate() {
                let replacements: Vec<char> = Self::candidates(*c).into_iter().skip(1).collect();
                if !replacements.is_empty() {
                    branches.push(Branch {
                        line,
                        index,
                        replacements,
                    });
                }
            }
        }
        debug!(
            "Searching {} ambiguous positions in {:?}",
            branches.len(),
            strings
        );

        let mut evaluations = 0usize;
        for substitutions in 0..=branches.len() {
            // Indices into `branches`, strictly increasing
            let mut chosen: Vec<usize> = (0..substitutions).collect();
            loop {
                // Replacement picked for each chosen branch
                let mut picks = vec![0usize; substitutions];
                loop {
                    if evaluations >= limit {
                        warn!(
                            "OCR correction search budget of {} combinations exhausted",
                            limit
                        );
                        return None;
                    }
                    evaluations += 1;

                    let mut candidate = original.clone();
                    for (slot, &branch_index) in chosen.iter().enumerate() {
                        let branch = &branches[branch_index];
                        candidate[branch.line][branch.index] = branch.replacements[picks[slot]];
                    }
                    let candidate: Vec<String> =
                        candidate.iter().map(|chars| chars.iter().collect()).collect();

                    if predicate(&candidate) {
                        debug!("Search matched after {} combinations", evaluations);
                        return Some(candidate);
                    }

                    if !Self::advance_picks(&mut picks, &chosen, &branches) {
                        break;
                    }
                }

                if !Self::advance_combination(&mut chosen, branches.len()) {
                    break;
                }
            }
        }

        debug!("Search space exhausted after {} combinations", evaluations);
        None
    }

    // Odometer over the replacements of the chosen branches, last slot fastest
    fn advance_picks(picks: &mut [usize], chosen: &[usize], branches: &[Branch]) -> bool {
        for slot in (0..picks.len()).rev() {
            picks[slot] += 1;
            if picks[slot] < branches[chosen[slot]].replacements.len() {
                return true;
            }
            picks[slot] = 0;
        }
        false
    }

    // Next k-combination of 0..n in lexicographic order
    fn advance_combination(chosen: &mut [usize], n: usize) -> bool {
        let k = chosen.len();
        for slot in (0..k).rev() {
            if chosen[slot] < n - k + slot {
                chosen[slot] += 1;
                for next in slot + 1..k {
                    chosen[next] = chosen[next - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}
