use listwise_lexicon::Lexicon;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::token::{numeral_value, tokenize};

/// What a token contributes to the parsed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum TokenClass {
    /// First token of the line, read as the item quantity.
    LeadingQuantity { value: Decimal },
    /// Unit word, with its canonical label.
    Unit { label: String },
    /// Marks the next numeral as part of the name (`número 100`).
    NumberIndicator,
    /// Numeral following a number indicator. Kept in the name.
    IndicatorNumber,
    /// Part of the display name.
    Name,
    /// Dropped connector.
    Discard,
}

impl TokenClass {
    /// Whether the token ends up in the display name.
    pub fn is_name_part(&self) -> bool {
        matches!(self, Self::Name | Self::NumberIndicator | Self::IndicatorNumber)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedToken {
    pub text: String,
    #[serde(flatten)]
    pub class: TokenClass,
}

/// Classify every token of `line`, left to right.
pub fn classify(line: &str, lexicon: &Lexicon) -> Vec<ClassifiedToken> {
    let tokens = tokenize(line, lexicon);
    let mut state = ClassifierState::default();
    let mut out = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        let phrase = match lexicon.indicator_phrase_len(&tokens[i..]) {
            Some(len) if !state.claims_quantity(&tokens[i], lexicon) => len,
            _ => 0,
        };
        if phrase > 0 {
            for text in &tokens[i..i + phrase] {
                log::debug!("token '{text}' -> NumberIndicator (phrase)");
                state.position += 1;
                out.push(ClassifiedToken { text: text.clone(), class: state.indicator() });
            }
            i += phrase;
            continue;
        }

        let text = tokens[i].clone();
        let class = state.step(&text, lexicon);
        log::debug!("token '{text}' -> {class:?}");
        out.push(ClassifiedToken { text, class });
        i += 1;
    }
    out
}

/// Per-line classifier state. Created fresh for every line.
#[derive(Debug, Default)]
struct ClassifierState {
    position: usize,
    quantity_consumed: bool,
    indicator_pending: bool,
    last_was_unit: bool,
    name_started: bool,
}

impl ClassifierState {
    /// Whether `token` would be read as the leading quantity.
    fn claims_quantity(&self, token: &str, lexicon: &Lexicon) -> bool {
        self.position == 0 && !self.quantity_consumed && numeral_value(token, lexicon).is_some()
    }

    /// One token of a number indicator, single word or phrase.
    fn indicator(&mut self) -> TokenClass {
        self.last_was_unit = false;
        self.indicator_pending = true;
        self.name_started = true;
        TokenClass::NumberIndicator
    }

    fn step(&mut self, token: &str, lexicon: &Lexicon) -> TokenClass {
        let first = self.position == 0;
        self.position += 1;
        // Only the very next token counts as "after the unit". The indicator
        // flag stays up until a numeral takes it.
        let after_unit = std::mem::take(&mut self.last_was_unit);

        // Leading quantity gets exactly one chance, at position 0.
        if first && !self.quantity_consumed {
            if let Some(value) = numeral_value(token, lexicon) {
                self.quantity_consumed = true;
                return TokenClass::LeadingQuantity { value };
            }
        }

        if lexicon.is_number_indicator(token) {
            return self.indicator();
        }

        if self.indicator_pending {
            if numeral_value(token, lexicon).is_some() {
                self.indicator_pending = false;
                self.name_started = true;
                return TokenClass::IndicatorNumber;
            }
        } else if let Some(label) = lexicon.canonical_unit(token) {
            self.last_was_unit = true;
            return TokenClass::Unit { label: label.to_string() };
        }

        if lexicon.is_stopword(token) && (after_unit || !self.name_started) {
            return TokenClass::Discard;
        }

        // Connectors past this point sit inside the name; the parser trims
        // any left dangling at the end.
        self.name_started = true;
        TokenClass::Name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(line: &str) -> Vec<(String, TokenClass)> {
        classify(line, Lexicon::builtin())
            .into_iter()
            .map(|t| (t.text, t.class))
            .collect()
    }

    fn qty(n: i64, scale: u32) -> TokenClass {
        TokenClass::LeadingQuantity { value: Decimal::new(n, scale) }
    }

    fn unit(label: &str) -> TokenClass {
        TokenClass::Unit { label: label.into() }
    }

    #[test]
    fn leading_digit_quantity() {
        let c = classes("2 kg arroz");
        assert_eq!(c[0].1, qty(2, 0));
        assert_eq!(c[1].1, unit("Kilogram"));
        assert_eq!(c[2].1, TokenClass::Name);
    }

    #[test]
    fn leading_number_word() {
        let c = classes("três latas de milho");
        assert_eq!(c[0].1, qty(3, 0));
        assert_eq!(c[1].1, unit("Can"));
        assert_eq!(c[2].1, TokenClass::Discard);
        assert_eq!(c[3].1, TokenClass::Name);
    }

    #[test]
    fn quantity_only_at_position_zero() {
        let c = classes("pilhas 4");
        assert_eq!(c[0].1, TokenClass::Name);
        assert_eq!(c[1].1, TokenClass::Name);
    }

    #[test]
    fn second_numeral_is_not_a_quantity() {
        let c = classes("2 3 maçãs");
        assert_eq!(c[0].1, qty(2, 0));
        assert_eq!(c[1].1, TokenClass::Name);
    }

    #[test]
    fn indicator_number_stays_in_name() {
        let c = classes("filtro de café número 100");
        assert_eq!(c[0].1, TokenClass::Name);
        assert_eq!(c[1].1, TokenClass::Name);
        assert_eq!(c[3].1, TokenClass::NumberIndicator);
        assert_eq!(c[4].1, TokenClass::IndicatorNumber);
    }

    #[test]
    fn unit_word_blocked_while_indicator_pending() {
        let c = classes("pilha tamanho g");
        assert_eq!(c[1].1, TokenClass::NumberIndicator);
        assert_eq!(c[2].1, TokenClass::Name);
    }

    #[test]
    fn indicator_flag_waits_for_a_numeral() {
        let c = classes("fralda tamanho grande kg");
        assert_eq!(c[1].1, TokenClass::NumberIndicator);
        assert_eq!(c[2].1, TokenClass::Name);
        assert_eq!(c[3].1, TokenClass::Name);
    }

    #[test]
    fn numeral_clears_pending_indicator() {
        let c = classes("fralda tamanho grande 2 pacotes");
        assert_eq!(c[2].1, TokenClass::Name);
        assert_eq!(c[3].1, TokenClass::IndicatorNumber);
        assert_eq!(c[4].1, unit("Package"));
    }

    #[test]
    fn decomposed_accents_are_recognized() {
        let c = classes("meia du\u{301}zia de ovos");
        assert_eq!(c[1].0, "d\u{fa}zia");
        assert_eq!(c[1].1, unit("Dozen"));
        assert_eq!(c[2].1, TokenClass::Discard);
    }

    #[test]
    fn multi_word_indicator_phrase() {
        let lex = Lexicon::from_toml(
            r#"
default_unit = "Each"
number_indicators = ["model number"]

[units]
Pack = ["pack"]
"#,
        )
        .unwrap();
        let c: Vec<TokenClass> = classify("filter model number pack 7", &lex)
            .into_iter()
            .map(|t| t.class)
            .collect();
        assert_eq!(
            c,
            vec![
                TokenClass::Name,
                TokenClass::NumberIndicator,
                TokenClass::NumberIndicator,
                TokenClass::Name,
                TokenClass::IndicatorNumber,
            ]
        );
    }

    #[test]
    fn stopword_after_unit_is_discarded() {
        let c = classes("meia dúzia de ovos");
        assert_eq!(c[0].1, qty(5, 1));
        assert_eq!(c[1].1, unit("Dozen"));
        assert_eq!(c[2].1, TokenClass::Discard);
        assert_eq!(c[3].1, TokenClass::Name);
    }

    #[test]
    fn leading_stopword_is_discarded() {
        let c = classes("e sabonete");
        assert_eq!(c[0].1, TokenClass::Discard);
        assert_eq!(c[1].1, TokenClass::Name);
    }

    #[test]
    fn mid_name_stopword_is_kept() {
        let c = classes("arroz com feijão");
        assert_eq!(c[1].1, TokenClass::Name);
    }

    #[test]
    fn unit_first_then_name() {
        let c = classes("kg de tomate");
        assert_eq!(c[0].1, unit("Kilogram"));
        assert_eq!(c[1].1, TokenClass::Discard);
        assert_eq!(c[2].1, TokenClass::Name);
    }

    #[test]
    fn numeral_wins_over_unit_at_position_zero() {
        // "l" is a unit form; a leading numeral still claims position 0.
        let c = classes("1 l leite");
        assert_eq!(c[0].1, qty(1, 0));
        assert_eq!(c[1].1, unit("Liter"));
    }

    #[test]
    fn name_part_classes() {
        assert!(TokenClass::Name.is_name_part());
        assert!(TokenClass::NumberIndicator.is_name_part());
        assert!(TokenClass::IndicatorNumber.is_name_part());
        assert!(!TokenClass::Discard.is_name_part());
        assert!(!unit("Kilogram").is_name_part());
    }
}
