//! Columns that receive list treatment.

/// Column names whose comma-delimited text becomes a list in the card.
pub const ARRAY_COLUMNS: [&str; 4] = ["category", "topics", "users", "language"];

/// The array columns, each with its own normalization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayColumn {
    Category,
    Topics,
    Users,
    Language,
}

impl ArrayColumn {
    /// Exact, case-sensitive match against the header name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "category" => Some(Self::Category),
            "topics" => Some(Self::Topics),
            "users" => Some(Self::Users),
            "language" => Some(Self::Language),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Topics => "topics",
            Self::Users => "users",
            Self::Language => "language",
        }
    }
}
