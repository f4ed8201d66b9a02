use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::LexiconError;

/// Embedded pt-BR table, the vocabulary used when no other is configured.
pub const BUILTIN_PT_BR: &str = include_str!("../data/pt-BR.toml");

// ---------------------------------------------------------------------------
// File shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    locale: String,
    default_unit: String,
    #[serde(default = "default_separator")]
    decimal_separator: String,
    #[serde(default)]
    numbers: HashMap<String, Decimal>,
    #[serde(default)]
    units: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    number_indicators: Vec<String>,
    #[serde(default)]
    stopwords: Vec<String>,
    #[serde(default)]
    prepositions: Vec<String>,
}

fn default_separator() -> String {
    ".".into()
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// Read-only vocabulary keyed by lowercase word.
#[derive(Debug, Clone)]
pub struct Lexicon {
    locale: String,
    default_unit: String,
    decimal_separator: char,
    numbers: HashMap<String, Decimal>,
    unit_canonical: HashMap<String, String>,
    unit_labels: Vec<String>,
    number_indicators: HashSet<String>,
    /// Multi-word indicators, longest first.
    indicator_phrases: Vec<Vec<String>>,
    stopwords: HashSet<String>,
    prepositions: HashSet<String>,
}

impl Lexicon {
    /// The embedded pt-BR vocabulary, parsed once per process.
    pub fn builtin() -> &'static Lexicon {
        static BUILTIN: OnceLock<Lexicon> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Lexicon::from_toml(BUILTIN_PT_BR).expect("embedded pt-BR lexicon must be valid")
        })
    }

    pub fn from_toml(input: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile =
            toml::from_str(input).map_err(|e| LexiconError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    /// Read and validate a lexicon from disk.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let input = std::fs::read_to_string(path)
            .map_err(|e| LexiconError::Io(format!("cannot read {}: {e}", path.display())))?;
        let lexicon = Self::from_toml(&input)?;
        log::debug!(
            "loaded lexicon '{}' from {} ({} number words, {} unit forms)",
            lexicon.locale,
            path.display(),
            lexicon.numbers.len(),
            lexicon.unit_canonical.len()
        );
        Ok(lexicon)
    }

    fn from_file(file: LexiconFile) -> Result<Self, LexiconError> {
        let default_unit = file.default_unit.trim().to_string();
        if default_unit.is_empty() {
            return Err(LexiconError::Validation("default_unit must not be empty".into()));
        }

        let mut sep = file.decimal_separator.chars();
        let decimal_separator = match (sep.next(), sep.next()) {
            (Some(c), None) if !c.is_alphanumeric() && !c.is_whitespace() => c,
            _ => {
                return Err(LexiconError::Validation(format!(
                    "decimal_separator must be a single punctuation character, got '{}'",
                    file.decimal_separator
                )))
            }
        };

        let mut numbers = HashMap::with_capacity(file.numbers.len());
        for (word, value) in file.numbers {
            let word = normalize_word(&word, "numbers")?;
            if value.is_sign_negative() && !value.is_zero() {
                return Err(LexiconError::Validation(format!(
                    "number word '{word}' has negative value {value}"
                )));
            }
            numbers.insert(word, value);
        }

        let mut unit_canonical: HashMap<String, String> = HashMap::new();
        let mut unit_labels = Vec::with_capacity(file.units.len());
        for (label, forms) in file.units {
            let label = label.trim().to_string();
            if label.is_empty() {
                return Err(LexiconError::Validation("unit label must not be empty".into()));
            }
            for form in forms {
                let form = normalize_word(&form, "units")?;
                if let Some(first) = unit_canonical.get(&form) {
                    if *first != label {
                        return Err(LexiconError::DuplicateUnitForm {
                            form,
                            first: first.clone(),
                            second: label,
                        });
                    }
                }
                unit_canonical.insert(form, label.clone());
            }
            unit_labels.push(label);
        }

        let mut number_indicators = HashSet::new();
        let mut indicator_phrases = Vec::new();
        for entry in &file.number_indicators {
            let words = normalize_phrase(entry, "number_indicators")?;
            match words.as_slice() {
                [single] => {
                    number_indicators.insert(single.clone());
                }
                _ => indicator_phrases.push(words),
            }
        }
        indicator_phrases.sort_by(|a, b| b.len().cmp(&a.len()));

        Ok(Self {
            locale: file.locale,
            default_unit,
            decimal_separator,
            numbers,
            unit_canonical,
            unit_labels,
            number_indicators,
            indicator_phrases,
            stopwords: normalize_set(file.stopwords, "stopwords")?,
            prepositions: normalize_set(file.prepositions, "prepositions")?,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Label used when a line names no unit.
    pub fn default_unit(&self) -> &str {
        &self.default_unit
    }

    /// Locale decimal separator, rewritten to `.` before classification.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn number_word(&self, word: &str) -> Option<Decimal> {
        self.numbers.get(word).copied()
    }

    pub fn is_unit(&self, word: &str) -> bool {
        self.unit_canonical.contains_key(word)
    }

    /// Canonical display label for a unit surface form (`kg` -> `Kilogram`).
    pub fn canonical_unit(&self, word: &str) -> Option<&str> {
        self.unit_canonical.get(word).map(String::as_str)
    }

    /// Canonical unit labels, sorted.
    pub fn unit_labels(&self) -> &[String] {
        &self.unit_labels
    }

    /// Every unit surface form with its canonical label.
    pub fn unit_forms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.unit_canonical.iter().map(|(f, l)| (f.as_str(), l.as_str()))
    }

    pub fn number_words(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.numbers.iter().map(|(w, v)| (w.as_str(), *v))
    }

    /// Single-word number indicator.
    pub fn is_number_indicator(&self, word: &str) -> bool {
        self.number_indicators.contains(word)
    }

    /// Length of the longest multi-word indicator that `tokens` starts with.
    pub fn indicator_phrase_len<S: AsRef<str>>(&self, tokens: &[S]) -> Option<usize> {
        self.indicator_phrases
            .iter()
            .find(|phrase| {
                phrase.len() <= tokens.len()
                    && phrase.iter().zip(tokens).all(|(p, t)| p == t.as_ref())
            })
            .map(Vec::len)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.contains(word)
    }
}

fn normalize_word(word: &str, table: &str) -> Result<String, LexiconError> {
    let word = word.trim().nfc().collect::<String>().to_lowercase();
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        return Err(LexiconError::Validation(format!(
            "{table}: entries must be single non-empty words, got '{word}'"
        )));
    }
    Ok(word)
}

fn normalize_phrase(entry: &str, table: &str) -> Result<Vec<String>, LexiconError> {
    let words: Vec<String> = entry
        .nfc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(LexiconError::Validation(format!(
            "{table}: entries must not be empty"
        )));
    }
    Ok(words)
}

fn normalize_set(words: Vec<String>, table: &str) -> Result<HashSet<String>, LexiconError> {
    words.iter().map(|w| normalize_word(w, table)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
