//! Error handling and result types for record store and codec operations.
//!
//! Every failure in this crate is reported to the immediate caller as an
//! explicit result value. Nothing is retried and nothing is fatal to the
//! process: a failed call leaves all prior state intact.

/// Error type for record store and structural codec operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BstError {
    /// Key not found in the store.
    KeyNotFound,
    /// Record rejected before insertion (e.g. empty key).
    InvalidRecord(String),
    /// Insert attempted with a key normalized-equal to an existing entry.
    DuplicateKey(String),
    /// Codec input that is neither an empty marker, a scalar, nor a
    /// well-formed triple.
    MalformedStructure(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
}

impl BstError {
    /// Create an InvalidRecord error with context
    pub fn invalid_record(details: &str) -> Self {
        Self::InvalidRecord(details.to_string())
    }

    /// Create a DuplicateKey error naming the offending key
    pub fn duplicate_key(key: &str) -> Self {
        Self::DuplicateKey(format!("key '{}' already exists", key))
    }

    /// Create a MalformedStructure error with position context
    pub fn malformed_structure(details: &str) -> Self {
        Self::MalformedStructure(details.to_string())
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error is a duplicate-key rejection
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey(_))
    }

    /// Check if this error is an invalid-record rejection
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecord(_))
    }

    /// Check if this error is a codec parse failure
    pub fn is_malformed_structure(&self) -> bool {
        matches!(self, Self::MalformedStructure(_))
    }
}

impl std::fmt::Display for BstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BstError::KeyNotFound => write!(f, "Key not found in store"),
            BstError::InvalidRecord(msg) => write!(f, "Invalid record: {}", msg),
            BstError::DuplicateKey(msg) => write!(f, "Duplicate key: {}", msg),
            BstError::MalformedStructure(msg) => write!(f, "Malformed structure: {}", msg),
            BstError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for BstError {}

/// Public result type for store and codec operations that may fail
pub type BstResult<T> = Result<T, BstError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, BstError>;

/// Result type for store modification operations
pub type ModifyResult<T> = Result<T, BstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(BstError::KeyNotFound.to_string(), "Key not found in store");
        assert_eq!(
            BstError::duplicate_key("bob").to_string(),
            "Duplicate key: key 'bob' already exists"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(BstError::duplicate_key("a").is_duplicate_key());
        assert!(BstError::invalid_record("empty key").is_invalid_record());
        assert!(BstError::malformed_structure("unbalanced parens").is_malformed_structure());
        assert!(!BstError::KeyNotFound.is_duplicate_key());
    }
}
