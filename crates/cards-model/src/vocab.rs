//! Controlled vocabularies for user and topic shorthand.
//!
//! Keys are lowercase shorthand; values are the display terms written to
//! cards. Both tables are fixed at build time.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Audience shorthand, in display order.
pub const USER_ENTRIES: &[(&str, &str)] = &[
    ("pts", "patients"),
    ("cps", "carepartners"),
    ("hcps", "clinicians"),
];

/// Topic shorthand, in display order.
pub const TOPIC_ENTRIES: &[(&str, &str)] = &[
    // Advance care planning
    ("advance directives", "Advance Directives"),
    ("feeding", "Feeding Assistance Decisions"),
    ("breathing", "Breathing Assistance Decisions"),
    // End of life care
    ("bereavement", "Bereavement Support"),
    ("legacy work", "Legacy Work"),
    ("financial planning", "Financial Planning"),
    // Palliative care and hospice
    ("definitions", "Definitions"),
    ("differences", "How Palliative Care and Hospice are Different"),
    (
        "benefits/timing/who provides",
        "Benefits, Timing, and Who Provides It",
    ),
];

static USER_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| USER_ENTRIES.iter().copied().collect());

static TOPIC_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TOPIC_ENTRIES.iter().copied().collect());

/// Which controlled vocabulary to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    Users,
    Topics,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 2] = [Vocabulary::Users, Vocabulary::Topics];

    pub fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Topics => "topics",
        }
    }

    /// Look up an already-lowercased key.
    pub fn lookup(self, key: &str) -> Option<&'static str> {
        let map = match self {
            Self::Users => &*USER_MAP,
            Self::Topics => &*TOPIC_MAP,
        };
        map.get(key).copied()
    }

    pub fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Users => USER_ENTRIES,
            Self::Topics => TOPIC_ENTRIES,
        }
    }
}
