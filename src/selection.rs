use crate::error::OrResult;
use regex::Regex;
use std::collections::HashSet;

/// Decides whether a chromosome belongs to a set (shuffle set, static set).
#[derive(Debug, Clone)]
pub enum Selector {
    All,
    Nothing,
    Explicit(HashSet<String>),
    Pattern(Regex),
}

impl Selector {
    pub fn explicit<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selector::Explicit(names.into_iter().map(Into::into).collect())
    }

    /// Unanchored: the pattern may match anywhere in the name.
    pub fn pattern(rx: &str) -> OrResult<Self> {
        Ok(Selector::Pattern(Regex::new(rx)?))
    }

    /// `None` selects nothing.
    pub fn optional_pattern(rx: Option<&str>) -> OrResult<Self> {
        match rx {
            Some(rx) => Self::pattern(rx),
            None => Ok(Selector::Nothing),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Nothing => false,
            Selector::Explicit(set) => set.contains(name),
            Selector::Pattern(rx) => rx.is_match(name),
        }
    }
}
