use serde::{Deserialize, Serialize};

/// Value of a single-select control.
///
/// Select widgets report a set of keys even in single mode; only the first
/// key is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Single(String),
}

impl Selection {
    /// Reduce a selection set to its first value.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values
            .into_iter()
            .next()
            .map(|v| Selection::Single(v.into()))
            .unwrap_or(Selection::None)
    }

    /// Native `<select>` elements report the empty string for the
    /// placeholder option; treat it as no selection.
    pub fn from_form_value(value: &str) -> Self {
        if value.is_empty() {
            Selection::None
        } else {
            Selection::Single(value.to_string())
        }
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Selection::None => None,
            Selection::Single(v) => Some(v),
        }
    }
}
