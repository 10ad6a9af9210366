//! Extension attribute descriptors.
//!
//! An event producer may define attributes beyond the well-known set. Each
//! one is described by an [`ExtensionAttribute`] supplied to
//! [`AttributeMap::new`](crate::AttributeMap::new). The map holds descriptors
//! as a read-only side table for its whole lifetime: they let embedding code
//! validate or render extension values, but none of the map's own invariants
//! depend on them.

use crate::error::Result;
use crate::value::AttributeValue;

/// Describes one producer-defined extension attribute.
///
/// Implementations must return a name that satisfies
/// [`is_valid_key`](crate::is_valid_key); construction of the map rejects
/// descriptors with malformed names.
pub trait ExtensionAttribute {
    /// The attribute name this descriptor governs.
    fn name(&self) -> &str;

    /// Check a proposed value for this attribute.
    ///
    /// The map never calls this itself; embedding code may consult it before
    /// writing the attribute.
    fn validate(&self, value: &AttributeValue) -> Result<()>;

    /// Render a value in this extension's canonical textual form.
    fn format(&self, value: &AttributeValue) -> String {
        value.to_string()
    }
}
