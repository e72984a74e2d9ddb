//! Multi-field criteria evaluated against a node's criterion children
//!
//! A node exposes a criterion field through direct children named after the
//! field plus a suffix from [`CriteriaOptions`]. With the default suffixes a
//! node restricting `region` and `version` looks like:
//!
//! ```text
//! rule
//! ├──regionInclude: [eu,us]
//! ├──regionExclude: cn
//! ├──versionStart: 3
//! └──versionEnd: 7
//! ```
//!
//! A criterion whose field the node does not expose is neutral. Fields the
//! node does expose narrow the match: include lists must intersect, exclude
//! lists must not, and every criterion value must fall inside the interval.

use derive_more::Display;
use log::{debug, warn};
use std::cmp::Ordering;

use crate::node::PropertyNode;
use crate::options::CriteriaOptions;
use crate::predicate::by_name;
use crate::property::PropertyName;
use crate::value::{Value, ValueSet};

/// A single field together with its admissible values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    /// The field being tested
    pub name: PropertyName,
    /// The values the caller is asking about
    pub values: ValueSet,
}

impl Criterion {
    pub fn new<V: Into<Value>>(
        name: impl Into<PropertyName>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
        }
    }

    /// A criterion with exactly one value
    pub fn single(name: impl Into<PropertyName>, value: impl Into<Value>) -> Self {
        Self::new(name, [value.into()])
    }
}

/// The outcome of one criterion for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum Verdict {
    /// The node does not expose the field
    #[display(fmt = "neutral")]
    Neutral,
    #[display(fmt = "accepted")]
    Accepted,
    #[display(fmt = "rejected ({})", _0)]
    Rejected(&'static str),
}

impl Verdict {
    fn passes(self) -> bool {
        !matches!(self, Verdict::Rejected(_))
    }
}

/// An ordered collection of [`Criterion`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    criteria: Vec<Criterion>,
    options: CriteriaOptions,
}

impl Criteria {
    /// Create criteria using the default suffixes
    pub fn new(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        Self {
            criteria: criteria.into_iter().collect(),
            options: CriteriaOptions::default(),
        }
    }

    /// Replace the suffix configuration
    pub fn with_options(mut self, options: CriteriaOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a criterion
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn options(&self) -> &CriteriaOptions {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Whether `node` passes every criterion
    ///
    /// Criteria the node does not expose are neutral, so a node exposing none
    /// of the fields is accepted. A criterion with no values never matches
    /// and rejects any node that exposes its field.
    pub fn satisfied_by(&self, node: &PropertyNode) -> bool {
        self.criteria.iter().all(|criterion| {
            let verdict = self.evaluate(criterion, node);
            debug!(
                "criterion '{}' on node '{}': {}",
                criterion.name,
                node.name(),
                verdict
            );
            verdict.passes()
        })
    }

    fn evaluate(&self, criterion: &Criterion, node: &PropertyNode) -> Verdict {
        let field = criterion.name.as_str();
        let includes = node.find_children(by_name(self.options.include_key(field)));
        let excludes = node.find_children(by_name(self.options.exclude_key(field)));
        let start = node.find_child(by_name(self.options.start_key(field)));
        let end = node.find_child(by_name(self.options.end_key(field)));

        if includes.is_empty() && excludes.is_empty() && start.is_not_found() && end.is_not_found() {
            return Verdict::Neutral;
        }

        if criterion.values.is_empty() {
            return Verdict::Rejected("no criterion values");
        }

        if excludes
            .iter()
            .any(|exclude| exclude.data().intersects(&criterion.values))
        {
            return Verdict::Rejected("excluded value");
        }

        if !includes.is_empty()
            && !includes
                .iter()
                .any(|include| include.data().intersects(&criterion.values))
        {
            return Verdict::Rejected("no included value");
        }

        if let Some(start) = start.property().single_comparable() {
            let end = end.property().single_comparable();
            let in_interval = criterion
                .values
                .iter()
                .all(|value| Self::in_interval(&criterion.name, value, start, end));
            if !in_interval {
                return Verdict::Rejected("outside interval");
            }
        }

        Verdict::Accepted
    }

    fn in_interval(name: &PropertyName, value: &Value, start: &Value, end: Option<&Value>) -> bool {
        let after_start = match start.compare(value) {
            Some(ordering) => ordering != Ordering::Greater,
            None => {
                warn!("criterion value not comparable {}: {} vs start {}", name, value, start);
                return false;
            }
        };

        match end {
            Some(end) if after_start => match value.compare(end) {
                Some(ordering) => ordering != Ordering::Greater,
                None => {
                    warn!("criterion value not comparable {}: {} vs end {}", name, value, end);
                    false
                }
            },
            _ => after_start,
        }
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}
