//! `listwise-parser`: turns one line of noisy dictated or scanned text into a
//! [`CandidateItem`](listwise_core::CandidateItem).
//!
//! Pipeline: [`tokenize`] splits on Unicode word boundaries, [`classify`]
//! labels each token left to right, [`Parser`] assembles quantity, unit and
//! display name.

pub mod classify;
pub mod parser;
pub mod token;

pub use classify::{classify, ClassifiedToken, TokenClass};
pub use parser::{parse, ParseOutcome, Parser, Rejection};
pub use token::{numeral_value, tokenize};
