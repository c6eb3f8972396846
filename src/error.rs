//! Error types for the form and annotation layer.
//!
//! Every failure is synchronous and recoverable. Setters validate their input
//! completely before touching the object graph, so an `Err` always leaves the
//! document exactly as it was.

/// Result type alias for form and annotation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or editing form fields and annotations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text string bytes could not be turned into Unicode text
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Value is not one of the export values of a non-editable choice field
    #[error("Value '{value}' is not a valid option for this field")]
    ValueNotAllowed {
        /// The rejected value
        value: String,
    },

    /// A sequence was supplied where only a single value is permitted
    #[error("Multiplicity violation: {0}")]
    MultiplicityViolation(String),

    /// Operation is not available for this kind of object
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Flag name is not defined for this flag set
    #[error("Unknown flag name: {0}")]
    UnknownFlagName(String),

    /// Referenced object does not exist in the document
    #[error("Object not found: {0} {1} R")]
    ObjectNotFound(u32, u16),

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },

    /// Reference or parent chain is too deep (or cyclic)
    #[error("Recursion depth limit exceeded (max: {0})")]
    RecursionLimitExceeded(u32),

    /// Invalid PDF structure (generic)
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_not_allowed_message() {
        let err = Error::ValueNotAllowed {
            value: "unknown".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown"));
        assert!(msg.contains("not a valid option"));
    }

    #[test]
    fn test_object_not_found_message() {
        let err = Error::ObjectNotFound(12, 0);
        assert_eq!(err.to_string(), "Object not found: 12 0 R");
    }

    #[test]
    fn test_invalid_object_type_message() {
        let err = Error::InvalidObjectType {
            expected: "Dictionary".to_string(),
            found: "Integer".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid object type: expected Dictionary, found Integer");
    }

    #[test]
    fn test_unknown_flag_message() {
        let err = Error::UnknownFlagName("unknown".to_string());
        assert_eq!(err.to_string(), "Unknown flag name: unknown");
    }
}
