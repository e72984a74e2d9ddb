//! Property names and the value container attached to every node

use derive_more::{Display, From};
use std::collections::BTreeMap;

use crate::options::CriteriaOptions;
use crate::value::{Value, ValueSet};

/// The name of a property (and of the node carrying it)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct PropertyName(pub String);

impl PropertyName {
    /// An empty name, used by the not-found sentinel
    pub const EMPTY: PropertyName = PropertyName(String::new());

    pub fn new(name: impl Into<String>) -> Self {
        PropertyName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name ends with any criteria suffix
    pub fn is_criterion(&self, options: &CriteriaOptions) -> bool {
        options.suffixes().any(|suffix| self.0.ends_with(suffix))
    }

    pub fn is_include_criterion(&self, options: &CriteriaOptions) -> bool {
        self.0.ends_with(options.include_suffix.as_str())
    }

    pub fn is_exclude_criterion(&self, options: &CriteriaOptions) -> bool {
        self.0.ends_with(options.exclude_suffix.as_str())
    }

    pub fn is_exclude_include_criterion(&self, options: &CriteriaOptions) -> bool {
        self.is_include_criterion(options) || self.is_exclude_criterion(options)
    }

    pub fn is_interval_start_criterion(&self, options: &CriteriaOptions) -> bool {
        self.0.ends_with(options.start_suffix.as_str())
    }

    pub fn is_interval_end_criterion(&self, options: &CriteriaOptions) -> bool {
        self.0.ends_with(options.end_suffix.as_str())
    }

    pub fn is_interval_criterion(&self, options: &CriteriaOptions) -> bool {
        self.is_interval_start_criterion(options) || self.is_interval_end_criterion(options)
    }

    /// The criterion field this name refers to, with its suffix stripped
    ///
    /// `priceStart` becomes `price`. Names without a criteria suffix are
    /// returned unchanged.
    pub fn criterion_base(&self, options: &CriteriaOptions) -> PropertyName {
        options
            .suffixes()
            .find_map(|suffix| self.0.strip_suffix(suffix))
            .map(PropertyName::new)
            .unwrap_or_else(|| self.clone())
    }

    /// The interval end name paired with this name (`priceStart` -> `priceEnd`)
    pub fn end_criterion_for_start(&self, options: &CriteriaOptions) -> PropertyName {
        PropertyName(format!(
            "{}{}",
            self.criterion_base(options),
            options.end_suffix
        ))
    }
}

impl From<&str> for PropertyName {
    fn from(name: &str) -> Self {
        PropertyName(name.to_string())
    }
}

impl From<&String> for PropertyName {
    fn from(name: &String) -> Self {
        PropertyName(name.clone())
    }
}

impl AsRef<str> for PropertyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The value container attached to a node
///
/// Besides the raw [`ValueSet`], a property exposes derived predicates such as
/// [`Property::is_set`] and typed single-value accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    /// The property name
    pub name: PropertyName,
    /// Optional free text
    pub description: Option<String>,
    /// The values
    pub data: ValueSet,
}

impl Property {
    /// The property of the not-found sentinel
    pub const EMPTY: Property = Property {
        name: PropertyName::EMPTY,
        description: None,
        data: ValueSet::new(),
    };

    pub fn new(name: impl Into<PropertyName>, description: Option<String>, data: ValueSet) -> Self {
        Self {
            name: name.into(),
            description,
            data,
        }
    }

    /// True iff the values contain `true`
    pub fn is_set(&self) -> bool {
        self.data.contains(&Value::Bool(true))
    }

    /// True iff the values contain `false` and not `true`
    pub fn is_not_set(&self) -> bool {
        self.data.contains(&Value::Bool(false)) && !self.is_set()
    }

    pub fn single_boolean(&self) -> Option<bool> {
        self.data.single().and_then(Value::as_bool)
    }

    pub fn single_int(&self) -> Option<i64> {
        self.data.single().and_then(Value::as_int)
    }

    pub fn single_string(&self) -> Option<&str> {
        self.data.single().and_then(Value::as_str)
    }

    pub fn single_object(&self) -> Option<&BTreeMap<String, Value>> {
        self.data.single().and_then(Value::as_object)
    }

    /// The only value, if it can take part in interval comparisons
    pub fn single_comparable(&self) -> Option<&Value> {
        self.data.single().filter(|value| value.is_comparable())
    }

    /// All integer values, in insertion order
    pub fn ints(&self) -> Vec<i64> {
        self.data.iter().filter_map(Value::as_int).collect()
    }

    /// All string values, in insertion order
    pub fn strings(&self) -> Vec<&str> {
        self.data.iter().filter_map(Value::as_str).collect()
    }

    /// All object values, in insertion order
    pub fn objects(&self) -> Vec<&BTreeMap<String, Value>> {
        self.data.iter().filter_map(Value::as_object).collect()
    }

    /// Return a property whose values are `update` applied to the current ones
    pub fn update<F>(&self, update: F) -> Property
    where
        F: FnOnce(&ValueSet) -> ValueSet,
    {
        let data = update(&self.data);
        if data == self.data {
            return self.clone();
        }
        Property {
            data,
            ..self.clone()
        }
    }
}
