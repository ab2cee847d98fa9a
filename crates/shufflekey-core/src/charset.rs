//! Character sets a keyboard can be built from.

use std::collections::HashSet;

/// Labels shown on the keys, in their initial order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharacterSet {
    /// Upper-case Latin letters `A` through `Z`.
    Letters,
    /// Phone keypad digits plus a decimal point.
    #[default]
    Numbers,
    /// Common punctuation symbols.
    Symbols,
    /// Caller-provided labels.
    Custom(Vec<String>),
}

/// Keypad order: top row is 7-8-9, bottom row is 0 and the decimal point.
const NUMBERS: [&str; 11] = ["7", "8", "9", "4", "5", "6", "1", "2", "3", "0", "."];

const SYMBOLS: [&str; 12] = ["@", "#", "$", "%", "&", "*", "(", ")", "-", "+", "=", "?"];

impl CharacterSet {
    /// Build a custom set from any iterator of labels.
    pub fn custom<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Custom(labels.into_iter().map(Into::into).collect())
    }

    /// Returns the labels in initial key order.
    ///
    /// Custom sets drop empty labels and duplicates, keeping the first
    /// occurrence of each label.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Letters => ('A'..='Z').map(String::from).collect(),
            Self::Numbers => NUMBERS.iter().map(|s| (*s).to_owned()).collect(),
            Self::Symbols => SYMBOLS.iter().map(|s| (*s).to_owned()).collect(),
            Self::Custom(labels) => {
                let mut seen = HashSet::new();
                labels
                    .iter()
                    .filter(|label| !label.is_empty() && seen.insert(label.as_str()))
                    .cloned()
                    .collect()
            },
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Numbers => "numbers",
            Self::Symbols => "symbols",
            Self::Custom(_) => "custom",
        }
    }
}
