use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Name is empty after trimming.
    EmptyName,
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be empty"),
        }
    }
}

impl std::error::Error for ItemError {}
