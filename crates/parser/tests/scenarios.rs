// End-to-end parsing of dictated and scanned shopping lines.

use listwise_lexicon::Lexicon;
use listwise_parser::{parse, Parser, Rejection, TokenClass};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn check(line: &str, name: &str, quantity: &str, unit: &str) {
    let item = parse(line).unwrap_or_else(|| panic!("no item parsed from {line:?}"));
    assert_eq!(item.name, name, "name for {line:?}");
    assert_eq!(item.quantity, d(quantity), "quantity for {line:?}");
    assert_eq!(item.unit, unit, "unit for {line:?}");
}

// -------------------------------------------------------------------------
// Dictation
// -------------------------------------------------------------------------

#[test]
fn dictated_lines() {
    check("2 Detergente Incolor", "Detergente Incolor", "2", "Unit");
    check("Filtro de Café número 100", "Filtro de Café Número 100", "1", "Unit");
    check("meia dúzia de ovos", "Ovos", "0.5", "Dozen");
    check("Pimentão Vermelho", "Pimentão Vermelho", "1", "Unit");
    check("dois quilos de arroz", "Arroz", "2", "Kilogram");
    check("uma garrafa de azeite", "Azeite", "1", "Bottle");
    check("cinco litros de leite", "Leite", "5", "Liter");
    check("doze rolos de papel higiênico", "Papel Higiênico", "12", "Roll");
}

#[test]
fn indicator_variants() {
    check("pilha tamanho 2", "Pilha Tamanho 2", "1", "Unit");
    check("3 filtro numero 102", "Filtro Numero 102", "3", "Unit");
    check("fralda nº 4", "Fralda Nº 4", "1", "Unit");
    check("fralda tamanho grande kg", "Fralda Tamanho Grande Kg", "1", "Unit");
    check("fralda tamanho grande 2 pacotes", "Fralda Tamanho Grande 2", "1", "Package");
}

#[test]
fn decomposed_accents() {
    check("meia du\u{301}zia de ovos", "Ovos", "0.5", "Dozen");
    check("tre\u{302}s latas de milho", "Milho", "3", "Can");
    check("cafe\u{301} nu\u{301}mero 3", "Caf\u{e9} N\u{fa}mero 3", "1", "Unit");
}

// -------------------------------------------------------------------------
// OCR
// -------------------------------------------------------------------------

#[test]
fn scanned_lines() {
    check("1,5 kg batata", "Batata", "1.5", "Kilogram");
    check("500g queijo ralado", "Queijo Ralado", "500", "Gram");
    check("  2   latas   milho  ", "Milho", "2", "Can");
    check("- sabonete", "Sabonete", "1", "Unit");
}

#[test]
fn scanned_page_batch() {
    let page = ["Lista da semana", "", "2 kg arroz", "---", "1 dúzia", "café"];
    let items: Vec<_> = page.iter().filter_map(|line| parse(line)).collect();
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Lista da Semana", "Arroz", "Café"]);
}

// -------------------------------------------------------------------------
// Rejections + explain
// -------------------------------------------------------------------------

#[test]
fn rejections_carry_reason() {
    let parser = Parser::default();
    assert_eq!(parser.explain("").result, Err(Rejection::EmptyInput));
    assert_eq!(parser.explain("...").result, Err(Rejection::EmptyInput));
    assert_eq!(parser.explain("3 pacotes").result, Err(Rejection::NoName));
    assert_eq!(parser.explain("de com e").result, Err(Rejection::NoName));
}

#[test]
fn explain_exposes_token_trail() {
    let outcome = Parser::default().explain("meia dúzia de ovos");
    let classes: Vec<&TokenClass> = outcome.tokens.iter().map(|t| &t.class).collect();
    assert_eq!(
        classes,
        vec![
            &TokenClass::LeadingQuantity { value: d("0.5") },
            &TokenClass::Unit { label: "Dozen".into() },
            &TokenClass::Discard,
            &TokenClass::Name,
        ]
    );
    assert_eq!(outcome.item().map(|i| i.name.as_str()), Some("Ovos"));
}

#[test]
fn parser_is_reusable_across_lines() {
    let parser = Parser::new(Lexicon::builtin());
    let first = parser.parse("2 kg arroz").unwrap();
    let second = parser.parse("feijão").unwrap();
    assert_eq!(first.quantity, d("2"));
    assert_eq!(second.quantity, Decimal::ONE);
    assert_eq!(second.unit, "Unit");
}
