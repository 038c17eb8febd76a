// Language categories offered by the popularity listing.
// A closed set: anything outside it is rejected at parse time.

use std::fmt;
use std::str::FromStr;

use crate::error::PopularError;

/// Selectable grouping key for the popular repositories listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    JavaScript,
    Ruby,
    Java,
    Css,
    Python,
}

impl Category {
    /// Every category in navigation order.
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::JavaScript,
        Category::Ruby,
        Category::Java,
        Category::Css,
        Category::Python,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::JavaScript => "JavaScript",
            Category::Ruby => "Ruby",
            Category::Java => "Java",
            Category::Css => "CSS",
            Category::Python => "Python",
        }
    }

    /// Language qualifier for the search query. `All` has none.
    pub fn language(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            other => Some(other.title()),
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Category {
    type Err = PopularError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.title() == s)
            .ok_or_else(|| PopularError::UnknownCategory(s.to_string()))
    }
}
