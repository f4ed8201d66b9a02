use std::fmt;

use listwise_core::CandidateItem;
use listwise_lexicon::Lexicon;
use rust_decimal::Decimal;

use crate::classify::{classify, ClassifiedToken, TokenClass};

/// Why a line produced no item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing but whitespace or punctuation.
    EmptyInput,
    /// Quantity and/or unit found, but no name left after cleanup.
    NoName,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::NoName => write!(f, "no item name found"),
        }
    }
}

/// Result of parsing one line, with the token trail that produced it.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub tokens: Vec<ClassifiedToken>,
    pub result: Result<CandidateItem, Rejection>,
}

impl ParseOutcome {
    pub fn item(&self) -> Option<&CandidateItem> {
        self.result.as_ref().ok()
    }

    pub fn into_item(self) -> Option<CandidateItem> {
        self.result.ok()
    }
}

/// Parse one line with the built-in vocabulary.
pub fn parse(line: &str) -> Option<CandidateItem> {
    Parser::default().parse(line)
}

/// Line parser bound to one lexicon. Holds no per-line state.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    lexicon: &'a Lexicon,
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl<'a> Parser<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn parse(&self, line: &str) -> Option<CandidateItem> {
        self.explain(line).into_item()
    }

    pub fn explain(&self, line: &str) -> ParseOutcome {
        let tokens = classify(line, self.lexicon);
        let result = self.assemble(&tokens);
        match &result {
            Ok(item) => log::debug!(
                "parsed '{line}' -> {} x {} {}",
                item.quantity,
                item.unit,
                item.name
            ),
            Err(why) => log::debug!("no item in '{line}': {why}"),
        }
        ParseOutcome { tokens, result }
    }

    fn assemble(&self, tokens: &[ClassifiedToken]) -> Result<CandidateItem, Rejection> {
        if tokens.is_empty() {
            return Err(Rejection::EmptyInput);
        }

        let quantity = tokens
            .iter()
            .find_map(|t| match t.class {
                TokenClass::LeadingQuantity { value } => Some(value),
                _ => None,
            })
            .unwrap_or(Decimal::ONE);

        let unit = tokens
            .iter()
            .rev()
            .find_map(|t| match &t.class {
                TokenClass::Unit { label } => Some(label.as_str()),
                _ => None,
            })
            .unwrap_or_else(|| self.lexicon.default_unit());

        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.class.is_name_part())
            .map(|t| t.text.as_str())
            .collect();

        let name = self.display_name(&words);
        if name.is_empty() {
            return Err(Rejection::NoName);
        }
        Ok(CandidateItem::parsed(name, quantity, unit))
    }

    /// Trim dangling connectors, collapse whitespace, and capitalize every
    /// word except connectors past the first position.
    fn display_name(&self, words: &[&str]) -> String {
        let mut words: Vec<&str> = words
            .iter()
            .flat_map(|w| w.split_whitespace())
            .collect();

        while words.first().is_some_and(|w| self.is_connector(w)) {
            words.remove(0);
        }
        while words.last().is_some_and(|w| self.is_connector(w)) {
            words.pop();
        }

        words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i > 0 && self.is_connector(w) {
                    w.to_lowercase()
                } else {
                    capitalize(w)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_connector(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.lexicon.is_preposition(&lower) || self.lexicon.is_stopword(&lower)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn leading_quantity_and_default_unit() {
        let item = parse("2 Detergente Incolor").unwrap();
        assert_eq!(item.name, "Detergente Incolor");
        assert_eq!(item.quantity, d("2"));
        assert_eq!(item.unit, "Unit");
        assert!(item.store_section.is_empty());
        assert!(!item.picked);
    }

    #[test]
    fn indicator_number_kept_in_name() {
        let item = parse("Filtro de Café número 100").unwrap();
        assert_eq!(item.name, "Filtro de Café Número 100");
        assert_eq!(item.quantity, Decimal::ONE);
        assert_eq!(item.unit, "Unit");
    }

    #[test]
    fn half_dozen_passes_through_literally() {
        let item = parse("meia dúzia de ovos").unwrap();
        assert_eq!(item.name, "Ovos");
        assert_eq!(item.quantity, d("0.5"));
        assert_eq!(item.unit, "Dozen");
    }

    #[test]
    fn compound_name_without_quantity() {
        let item = parse("Pimentão Vermelho").unwrap();
        assert_eq!(item.name, "Pimentão Vermelho");
        assert_eq!(item.quantity, Decimal::ONE);
        assert_eq!(item.unit, "Unit");
    }

    #[test]
    fn decimal_comma_quantity() {
        let item = parse("1,5 kg de carne moída").unwrap();
        assert_eq!(item.quantity, d("1.5"));
        assert_eq!(item.unit, "Kilogram");
        assert_eq!(item.name, "Carne Moída");
    }

    #[test]
    fn last_unit_wins() {
        let item = parse("2 pacotes caixas de leite").unwrap();
        assert_eq!(item.unit, "Box");
        assert_eq!(item.name, "Leite");
    }

    #[test]
    fn trailing_preposition_trimmed() {
        let item = parse("3 rolos papel de").unwrap();
        assert_eq!(item.name, "Papel");
        assert_eq!(item.unit, "Roll");
    }

    #[test]
    fn repeated_dangling_connectors_trimmed() {
        let item = parse("sabão em pó de com").unwrap();
        assert_eq!(item.name, "Sabão Em Pó");
    }

    #[test]
    fn internal_connectors_stay_lowercase() {
        let item = parse("ARROZ COM FEIJÃO").unwrap();
        assert_eq!(item.name, "Arroz com Feijão");
    }

    #[test]
    fn empty_line_is_rejected() {
        let outcome = Parser::default().explain("   ");
        assert_eq!(outcome.result, Err(Rejection::EmptyInput));
        assert!(outcome.tokens.is_empty());
        assert!(parse("").is_none());
    }

    #[test]
    fn quantity_and_unit_without_name_is_rejected() {
        let outcome = Parser::default().explain("2 kg");
        assert_eq!(outcome.result, Err(Rejection::NoName));
        assert_eq!(outcome.tokens.len(), 2);
    }

    #[test]
    fn lone_preposition_is_rejected() {
        assert!(parse("de").is_none());
    }

    #[test]
    fn custom_lexicon() {
        let lex = Lexicon::from_toml(
            r#"
default_unit = "Each"
stopwords = ["of", "and", "a"]
prepositions = ["of"]
number_indicators = ["size"]

[numbers]
two = 2
half = 0.5

[units]
Dozen = ["dozen"]
Kilogram = ["kg"]
"#,
        )
        .unwrap();
        let parser = Parser::new(&lex);

        let item = parser.parse("half a dozen of eggs").unwrap();
        assert_eq!(item.quantity, d("0.5"));
        assert_eq!(item.unit, "Dozen");
        assert_eq!(item.name, "Eggs");

        let item = parser.parse("two cans of tomato sauce").unwrap();
        assert_eq!(item.unit, "Each");
        assert_eq!(item.name, "Cans of Tomato Sauce");

        let item = parser.parse("coffee filter size 4").unwrap();
        assert_eq!(item.name, "Coffee Filter Size 4");
    }

    #[test]
    fn capitalize_unicode() {
        assert_eq!(capitalize("ávila"), "Ávila");
        assert_eq!(capitalize("ÇAFÉ"), "Çafé");
        assert_eq!(capitalize(""), "");
    }
}
