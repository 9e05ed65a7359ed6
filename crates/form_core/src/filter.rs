use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One of the fixed response fields a user can choose to display.
///
/// Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterName {
    Numbers,
    Alphabets,
    HighestAlphabet,
}

impl FilterName {
    pub const ALL: [FilterName; 3] = [
        FilterName::Numbers,
        FilterName::Alphabets,
        FilterName::HighestAlphabet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterName::Numbers => "Numbers",
            FilterName::Alphabets => "Alphabets",
            FilterName::HighestAlphabet => "Highest Alphabet",
        }
    }

    /// Response field this filter reads.
    pub fn field(self) -> &'static str {
        match self {
            FilterName::Numbers => "numbers",
            FilterName::Alphabets => "alphabets",
            FilterName::HighestAlphabet => "highest_alphabet",
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter {0:?} (expected one of: Numbers, Alphabets, Highest Alphabet)")]
pub struct FilterParseError(pub String);

impl FromStr for FilterName {
    type Err = FilterParseError;

    /// Accepts the label or the field name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FilterName::ALL
            .into_iter()
            .find(|name| {
                name.label().eq_ignore_ascii_case(wanted)
                    || name.field().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

/// The set of filters currently selected. Iterates in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedFilters {
    names: BTreeSet<FilterName>,
}

impl SelectedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise a widget selection; `None` means nothing is selected.
    pub fn from_selection<I>(selection: Option<I>) -> Self
    where
        I: IntoIterator<Item = FilterName>,
    {
        selection.map(Self::from_iter).unwrap_or_default()
    }

    pub fn all() -> Self {
        Self::from_iter(FilterName::ALL)
    }

    pub fn contains(&self, name: FilterName) -> bool {
        self.names.contains(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FilterName> + '_ {
        self.names.iter().copied()
    }
}

impl FromIterator<FilterName> for SelectedFilters {
    fn from_iter<T: IntoIterator<Item = FilterName>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
