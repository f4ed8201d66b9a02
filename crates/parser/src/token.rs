use std::str::FromStr;

use listwise_lexicon::Lexicon;
use rust_decimal::Decimal;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Split a line into lowercase word tokens.
///
/// Segments without any alphanumeric character (spaces, stray punctuation)
/// are dropped. A numeral glued to a unit form (`2kg`, `1.5l`) becomes two
/// tokens.
pub fn tokenize(line: &str, lexicon: &Lexicon) -> Vec<String> {
    let normalized = normalize(line, lexicon.decimal_separator());
    normalized
        .split_word_bounds()
        .filter(|seg| seg.chars().any(char::is_alphanumeric))
        .flat_map(|seg| split_glued_unit(seg, lexicon))
        .collect()
}

/// Compose accents (NFC), lowercase, and rewrite the locale decimal
/// separator to `.` when it sits between two digits (`1,5` -> `1.5`).
/// Elsewhere the separator is left alone so it still splits words.
fn normalize(line: &str, separator: char) -> String {
    let lower = line.nfc().collect::<String>().to_lowercase();
    if separator == '.' {
        return lower;
    }
    let chars: Vec<char> = lower.chars().collect();
    let mut out = String::with_capacity(lower.len());
    for (i, &c) in chars.iter().enumerate() {
        let between_digits = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if c == separator && between_digits {
            out.push('.');
        } else {
            out.push(c);
        }
    }
    out
}

fn split_glued_unit(segment: &str, lexicon: &Lexicon) -> Vec<String> {
    let split_at = segment
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i);

    if let Some(i) = split_at {
        let (number, rest) = segment.split_at(i);
        if digit_value(number).is_some() && lexicon.is_unit(rest) {
            return vec![number.to_string(), rest.to_string()];
        }
    }
    vec![segment.to_string()]
}

/// Numeric value of a token: a number word from the lexicon, or a plain
/// non-negative digit numeral with at most one `.`.
pub fn numeral_value(token: &str, lexicon: &Lexicon) -> Option<Decimal> {
    lexicon.number_word(token).or_else(|| digit_value(token))
}

fn digit_value(token: &str) -> Option<Decimal> {
    let starts = token.chars().next().is_some_and(|c| c.is_ascii_digit());
    let ends = token.chars().last().is_some_and(|c| c.is_ascii_digit());
    let well_formed = token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.matches('.').count() <= 1;
    if !(starts && ends && well_formed) {
        return None;
    }
    Decimal::from_str(token).ok()
}
