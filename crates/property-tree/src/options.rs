//! Configuration options for criteria evaluation.
//!
//! A node exposes a criterion field through children whose names are the
//! field name followed by one of the suffixes configured here.

/// Default suffix marking admissible values for a field.
pub const INCLUDE_KEY_SUFFIX: &str = "Include";
/// Default suffix marking rejected values for a field.
pub const EXCLUDE_KEY_SUFFIX: &str = "Exclude";
/// Default suffix marking the lower bound of an interval.
pub const INTERVAL_START_KEY_SUFFIX: &str = "Start";
/// Default suffix marking the upper bound of an interval.
pub const INTERVAL_END_KEY_SUFFIX: &str = "End";

/// Configuration options for [`Criteria`](crate::Criteria).
///
/// These options name the child-node suffixes that turn a child into a
/// criterion dimension of its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriteriaOptions {
    /// Suffix of children listing admissible values (e.g. `regionInclude`).
    pub include_suffix: String,

    /// Suffix of children listing rejected values (e.g. `regionExclude`).
    pub exclude_suffix: String,

    /// Suffix of the child holding an interval's lower bound (e.g. `versionStart`).
    pub start_suffix: String,

    /// Suffix of the child holding an interval's upper bound (e.g. `versionEnd`).
    pub end_suffix: String,
}

impl Default for CriteriaOptions {
    fn default() -> Self {
        Self {
            include_suffix: INCLUDE_KEY_SUFFIX.to_string(),
            exclude_suffix: EXCLUDE_KEY_SUFFIX.to_string(),
            start_suffix: INTERVAL_START_KEY_SUFFIX.to_string(),
            end_suffix: INTERVAL_END_KEY_SUFFIX.to_string(),
        }
    }
}

impl CriteriaOptions {
    /// Create new criteria options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the include suffix.
    pub fn include_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.include_suffix = suffix.into();
        self
    }

    /// Set the exclude suffix.
    pub fn exclude_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exclude_suffix = suffix.into();
        self
    }

    /// Set both interval suffixes.
    pub fn interval_suffixes(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_suffix = start.into();
        self.end_suffix = end.into();
        self
    }

    /// All configured suffixes.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        [
            self.include_suffix.as_str(),
            self.exclude_suffix.as_str(),
            self.start_suffix.as_str(),
            self.end_suffix.as_str(),
        ]
        .into_iter()
    }

    /// The child name carrying the include values for `field`.
    pub fn include_key(&self, field: &str) -> String {
        format!("{}{}", field, self.include_suffix)
    }

    /// The child name carrying the exclude values for `field`.
    pub fn exclude_key(&self, field: &str) -> String {
        format!("{}{}", field, self.exclude_suffix)
    }

    /// The child name carrying the interval start for `field`.
    pub fn start_key(&self, field: &str) -> String {
        format!("{}{}", field, self.start_suffix)
    }

    /// The child name carrying the interval end for `field`.
    pub fn end_key(&self, field: &str) -> String {
        format!("{}{}", field, self.end_suffix)
    }
}
