use std::fmt;

#[derive(Debug)]
pub enum LexiconError {
    /// TOML parse / deserialization error.
    Parse(String),
    /// Table content is unusable (empty default unit, negative number, ...).
    Validation(String),
    /// One surface form is listed under two canonical unit labels.
    DuplicateUnitForm { form: String, first: String, second: String },
    /// IO error reading a lexicon file.
    Io(String),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "lexicon parse error: {msg}"),
            Self::Validation(msg) => write!(f, "lexicon validation error: {msg}"),
            Self::DuplicateUnitForm { form, first, second } => {
                write!(f, "unit form '{form}' is listed under both '{first}' and '{second}'")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for LexiconError {}
