//! Property Tree Library
//!
//! A small hierarchical structure of named nodes, each carrying an optional
//! description and a set of values, used to query and filter
//! configuration-like data by name or by multi-field criteria.
//!
//! # Core Concepts
//!
//! - **PropertyNode**: a named node with a [`Property`] and ordered children
//! - **Property**: the value set attached to a node, with derived predicates
//!   such as [`Property::is_set`]
//! - **Not-found sentinel**: the inert node returned by lookups that match
//!   nothing, so results can be inspected without a null check
//! - **Criteria**: named fields with admissible values, turned into a filter
//!   predicate by [`by_criteria`]
//!
//! # Example
//!
//! ```
//! use property_tree::prelude::*;
//!
//! let tree = property_node_of(
//!     "root",
//!     Some("desc"),
//!     values![1, 2, 3],
//!     [
//!         property_node_of("child1", None, values![true], []),
//!         property_node_of("child2", None, ValueSet::new(), []),
//!     ],
//! );
//!
//! assert!(tree.find(by_name("child1")).property().is_set());
//! assert!(!tree.find(by_name("child3")).property().is_set());
//! assert!(!tree.find_child(by_name("foo")).property().is_set());
//!
//! let criteria = Criteria::new([
//!     Criterion::single("foo", 1),
//!     Criterion::new("bar", ["sf", "34"]),
//!     Criterion::single("car", 1),
//! ]);
//! let filtered = tree.filter(by_criteria(criteria));
//! assert_eq!(filtered, tree);
//! ```

mod builder;
mod criteria;
mod node;
mod options;
mod predicate;
mod property;
mod transform;
mod traverse;
mod value;

pub use builder::PropertyNodeBuilder;
pub use criteria::{Criteria, Criterion};
pub use node::{property_node_of, NodeKind, PropertyNode};
pub use options::{
    CriteriaOptions, EXCLUDE_KEY_SUFFIX, INCLUDE_KEY_SUFFIX, INTERVAL_END_KEY_SUFFIX,
    INTERVAL_START_KEY_SUFFIX,
};
pub use predicate::{by_criteria, by_name};
pub use property::{Property, PropertyName};
pub use traverse::Traverse;
pub use value::{Value, ValueSet};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::criteria::{Criteria, Criterion};
    pub use crate::node::{property_node_of, PropertyNode};
    pub use crate::options::CriteriaOptions;
    pub use crate::predicate::{by_criteria, by_name};
    pub use crate::property::{Property, PropertyName};
    pub use crate::value::{Value, ValueSet};
    pub use crate::values;
}
