use thiserror::Error;

/// Errors produced by attribute-map operations.
///
/// Every mutating operation either applies fully or fails with one of these
/// variants and leaves the map untouched. Variants carry the offending key so
/// callers can report it without re-deriving context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributesError {
    /// Construction arguments were unusable (e.g. an empty spec-version
    /// identifier). No map is returned.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The key fails format validation: keys must be non-empty and consist
    /// only of ASCII lower-case letters and digits.
    ///
    /// The message template is stable: it always starts with
    /// `invalid attribute key \`<key>\`` so callers and tests can match on
    /// the prefix.
    #[error("invalid attribute key `{key}`: keys must be non-empty lower-case ASCII letters or digits")]
    InvalidKey { key: String },

    /// An attempt to remove the spec-version attribute or set it to an
    /// absent value. The spec-version entry is mandatory and protected.
    #[error("attribute `{key}` is protected: the spec version cannot be cleared or removed")]
    Protected { key: String },

    /// A structured add was given an absent value. Unlike `set`, `add` never
    /// treats absence as deletion intent.
    #[error("attribute `{key}` cannot be added with an absent value")]
    NullValue { key: String },

    /// A structured add collided with an existing entry.
    #[error("attribute `{key}` is already present")]
    DuplicateKey { key: String },

    /// An extension descriptor rejected a proposed value. Only produced by
    /// [`ExtensionAttribute::validate`](crate::ExtensionAttribute::validate)
    /// implementations, never by the map itself.
    #[error("invalid value for attribute `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AttributesError>;
