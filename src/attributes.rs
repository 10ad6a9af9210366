//! The attribute map: an ordered, validated set of event attributes.
//!
//! The map behaves like a plain string-keyed map (get/set, where setting an
//! absent value deletes) and like a strict collection (add/remove-entry,
//! where an absent value is an error). Both views funnel through the same
//! private insertion and removal primitives, so key validation and the
//! spec-version protection cannot diverge between them.

use std::collections::HashMap;
use std::fmt;
use std::slice;

use crate::error::{AttributesError, Result};
use crate::extension::ExtensionAttribute;
use crate::value::AttributeValue;

/// Key of the mandatory, protected spec-version attribute.
pub const SPEC_VERSION_ATTRIBUTE: &str = "specversion";

/// Key of the event-type attribute. Consumers use this constant instead of
/// hardcoding the literal.
pub const TYPE_ATTRIBUTE: &str = "type";

/// Whether `key` is a well-formed attribute key: non-empty, every character
/// an ASCII lower-case letter or digit.
///
/// Digits-only keys are accepted. All mutating operations use this exact
/// rule; there is no second validation path.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// An ordered map of event attributes.
///
/// Created with a spec-version identifier that becomes the map's one
/// mandatory entry. That entry can be overwritten with a new value but never
/// removed or set to absent. Every other entry comes and goes freely, in
/// stable insertion order.
///
/// Each event owns exactly one map; there is no internal synchronization.
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
    extensions: HashMap<String, Box<dyn ExtensionAttribute>>,
}

impl AttributeMap {
    /// Create a map containing only the spec-version entry.
    ///
    /// Fails with [`AttributesError::Configuration`] if the identifier is
    /// empty.
    pub fn new(spec_version: impl Into<String>) -> Result<Self> {
        Self::with_extensions(spec_version, Vec::new())
    }

    /// Create a map with a set of extension attribute descriptors.
    ///
    /// The descriptor table is fixed for the map's lifetime. Fails with
    /// [`AttributesError::InvalidKey`] if a descriptor's name is malformed,
    /// or [`AttributesError::DuplicateKey`] if two descriptors share a name.
    pub fn with_extensions(
        spec_version: impl Into<String>,
        extensions: Vec<Box<dyn ExtensionAttribute>>,
    ) -> Result<Self> {
        let spec_version = spec_version.into();
        if spec_version.is_empty() {
            return Err(AttributesError::Configuration(
                "spec version identifier must not be empty".to_string(),
            ));
        }

        let mut table = HashMap::with_capacity(extensions.len());
        for ext in extensions {
            let name = ext.name().to_string();
            ensure_valid_key(&name)?;
            if table.insert(name.clone(), ext).is_some() {
                return Err(AttributesError::DuplicateKey { key: name });
            }
        }

        Ok(Self {
            entries: vec![(
                SPEC_VERSION_ATTRIBUTE.to_string(),
                AttributeValue::String(spec_version),
            )],
            extensions: table,
        })
    }

    /// Current value for `key`, or `None` if not present. Never fails.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// The spec-version value. Always present.
    pub fn spec_version(&self) -> &AttributeValue {
        match self.get(SPEC_VERSION_ATTRIBUTE) {
            Some(v) => v,
            None => unreachable!("spec version entry is always present"),
        }
    }

    /// Insert, overwrite, or delete `key`.
    ///
    /// `None` means deletion intent: the entry is removed if present, and
    /// removing an absent key is not an error. The spec-version key cannot
    /// be set to `None`. A fresh key is appended at the end of the iteration
    /// order; overwriting keeps the existing position.
    pub fn set(&mut self, key: &str, value: impl Into<Option<AttributeValue>>) -> Result<()> {
        ensure_valid_key(key)?;
        match value.into() {
            Some(value) => {
                self.insert_or_replace(key, value);
                Ok(())
            }
            None => {
                if is_protected(key) {
                    return Err(AttributesError::Protected {
                        key: key.to_string(),
                    });
                }
                self.remove_if_present(key);
                Ok(())
            }
        }
    }

    /// Strict insert: fails on a malformed key, an absent value, or a key
    /// that is already present (the spec-version key always is).
    pub fn add(&mut self, key: &str, value: impl Into<Option<AttributeValue>>) -> Result<()> {
        ensure_valid_key(key)?;
        let value = value.into().ok_or_else(|| AttributesError::NullValue {
            key: key.to_string(),
        })?;
        if self.position(key).is_some() {
            return Err(AttributesError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.entries.push((key.to_string(), value));
        Ok(())
    }

    /// Like [`add`](Self::add), but a duplicate key becomes `Ok(false)`
    /// instead of an error, leaving the existing value untouched. Malformed
    /// keys and absent values still fail.
    pub fn try_add(
        &mut self,
        key: &str,
        value: impl Into<Option<AttributeValue>>,
    ) -> Result<bool> {
        match self.add(key, value) {
            Ok(()) => Ok(true),
            Err(AttributesError::DuplicateKey { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Remove the entry for `key`, reporting whether one was removed.
    ///
    /// The spec-version key cannot be removed.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        if is_protected(key) {
            return Err(AttributesError::Protected {
                key: key.to_string(),
            });
        }
        Ok(self.remove_if_present(key))
    }

    /// Remove the entry only if both key and value match.
    ///
    /// The protection check comes first: removing the spec-version pair
    /// fails whatever value is supplied.
    pub fn remove_entry(&mut self, key: &str, value: &AttributeValue) -> Result<bool> {
        if is_protected(key) {
            return Err(AttributesError::Protected {
                key: key.to_string(),
            });
        }
        match self.position(key) {
            Some(i) if self.entries[i].1 == *value => {
                self.entries.remove(i);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Remove every entry except the spec-version entry, which keeps its
    /// current value.
    pub fn clear(&mut self) {
        self.entries.retain(|(k, _)| is_protected(k));
    }

    /// Number of entries, spec-version entry included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` while the map's invariants hold; provided for map
    /// convention.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in stable insertion order. Restartable; borrows the
    /// map, so mutating while iterating is rejected at compile time.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// The extension descriptor registered under `name`, if any.
    pub fn extension(&self, name: &str) -> Option<&dyn ExtensionAttribute> {
        self.extensions.get(name).map(|e| e.as_ref())
    }

    /// Names of all registered extension descriptors, in no particular
    /// order.
    pub fn extension_names(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn insert_or_replace(&mut self, key: &str, value: AttributeValue) {
        match self.position(key) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    fn remove_if_present(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeMap")
            .field("entries", &self.entries)
            .field("extensions", &self.extensions.keys())
            .finish()
    }
}

/// Borrowing iterator over `(key, value)` pairs in insertion order.
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, AttributeValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a AttributeValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a str, &'a AttributeValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

fn ensure_valid_key(key: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(AttributesError::InvalidKey {
            key: key.to_string(),
        })
    }
}

fn is_protected(key: &str) -> bool {
    key == SPEC_VERSION_ATTRIBUTE
}
