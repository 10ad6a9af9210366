//! # eventattrs
//!
//! A validated, ordered attribute map for CloudEvents-style event envelopes.
//! This is a **pure data-structure library**: it owns no wire format, no
//! I/O, and no event payload — serializers, protocol bindings, and the event
//! object itself are external collaborators that read and write through this
//! crate's API.
//!
//! ## The two faces of the map
//!
//! [`AttributeMap`] satisfies two contracts at once:
//!
//! - A **direct map**: [`get`](AttributeMap::get) /
//!   [`set`](AttributeMap::set), where setting a key to `None` means
//!   "delete this entry" rather than "store a null".
//! - A **strict collection**: [`add`](AttributeMap::add) /
//!   [`try_add`](AttributeMap::try_add) /
//!   [`remove_entry`](AttributeMap::remove_entry), where an absent value is
//!   an error and a colliding key is reported instead of overwritten.
//!
//! Both faces delegate to the same validated primitives internally, so the
//! rules below hold no matter which one a caller uses.
//!
//! ## The rules
//!
//! 1. Every key is non-empty ASCII lower-case letters or digits
//!    ([`is_valid_key`]).
//! 2. The spec-version entry ([`SPEC_VERSION_ATTRIBUTE`]) always exists: it
//!    is seeded at construction and can be overwritten but never removed,
//!    cleared, or set to an absent value.
//! 3. A null is never stored. Absence is `Option::None` at the API boundary
//!    only.
//! 4. Iteration order is insertion order, stable and observable.
//!
//! Failed operations leave the map untouched; see
//! [`AttributesError`](error::AttributesError) for the failure taxonomy.
//!
//! ## Module Overview
//!
//! - [`attributes`]: [`AttributeMap`] and the key-format rule
//! - [`value`]: [`AttributeValue`], the typed scalar attribute values
//! - [`extension`]: [`ExtensionAttribute`] descriptors for producer-defined
//!   attributes
//! - [`error`]: Error types

pub mod attributes;
pub mod error;
pub mod extension;
pub mod value;

pub use attributes::{
    is_valid_key, AttributeMap, Iter, SPEC_VERSION_ATTRIBUTE, TYPE_ATTRIBUTE,
};
pub use error::{AttributesError, Result};
pub use extension::ExtensionAttribute;
pub use value::AttributeValue;
