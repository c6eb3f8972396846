//! Consistency checks for choice field dictionaries.
//!
//! Checks run in two phases. First every issue is collected without
//! touching the dictionary; then, if auto-correction is requested and every
//! issue can be corrected, all corrections are applied. A field is never
//! left half-repaired.

use super::choice_field::ChoiceField;
use super::field::FormField;
use crate::document::DictionaryObject;
use crate::error::Result;
use crate::object::Object;

/// Field type name of choice fields.
const CHOICE_FIELD_TYPE: &str = "Ch";

/// A problem found by [`ChoiceField::validation_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// `/FT` is missing; correctable by writing `Ch`
    MissingFieldType,
    /// `/FT` names another field type; not correctable
    WrongFieldType(String),
    /// `/V` or `/DV` holds several values although the field does not allow
    /// that; correctable by keeping the first value
    UnexpectedSequence(&'static str),
}

impl ValidationIssue {
    /// Whether auto-correction can repair this issue.
    pub fn is_correctable(&self) -> bool {
        !matches!(self, ValidationIssue::WrongFieldType(_))
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MissingFieldType => write!(f, "field type /FT is missing"),
            ValidationIssue::WrongFieldType(found) => {
                write!(f, "field type is /{}, expected /{}", found, CHOICE_FIELD_TYPE)
            },
            ValidationIssue::UnexpectedSequence(key) => {
                write!(f, "/{} holds several values but the field is not multi-select", key)
            },
        }
    }
}

impl ChoiceField<'_> {
    /// Collect consistency problems without changing anything.
    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        match self.field_type() {
            None => issues.push(ValidationIssue::MissingFieldType),
            Some(CHOICE_FIELD_TYPE) => {},
            Some(other) => issues.push(ValidationIssue::WrongFieldType(other.to_string())),
        }

        if !self.kind().allows_multiple_values() {
            for key in ["V", "DV"] {
                if matches!(self.get(key), Some(Object::Array(_))) {
                    issues.push(ValidationIssue::UnexpectedSequence(key));
                }
            }
        }

        issues
    }

    /// Check the field and optionally repair it.
    ///
    /// Returns `true` if the field is valid afterwards. With `auto_correct`
    /// false, or when any issue cannot be corrected, nothing is modified.
    pub fn validate(&mut self, auto_correct: bool) -> bool {
        let issues = self.validation_issues();
        if issues.is_empty() {
            return true;
        }

        for issue in &issues {
            log::warn!("Choice field {}: {}", self.object_ref(), issue);
        }
        if !auto_correct || !issues.iter().all(ValidationIssue::is_correctable) {
            return false;
        }

        match self.apply_corrections(&issues) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not correct choice field {}: {}", self.object_ref(), e);
                false
            },
        }
    }

    fn apply_corrections(&mut self, issues: &[ValidationIssue]) -> Result<()> {
        for issue in issues {
            match issue {
                ValidationIssue::MissingFieldType => {
                    self.set("FT", Object::name(CHOICE_FIELD_TYPE))?;
                },
                ValidationIssue::UnexpectedSequence(key) => {
                    let first = match self.get(key) {
                        Some(Object::Array(values)) => values.first().cloned(),
                        _ => None,
                    };
                    match first {
                        Some(first) => self.set(key, first)?,
                        None => {
                            self.delete(key)?;
                        },
                    }
                },
                ValidationIssue::WrongFieldType(_) => {},
            }
            log::info!("Choice field {}: corrected {}", self.object_ref(), issue);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_valid_field_has_no_issues() {
        let mut doc = Document::new();
        let field_ref = doc.add_choice_field("choice").unwrap();
        let mut field = doc.choice_field(field_ref).unwrap();
        assert!(field.validation_issues().is_empty());
        assert!(field.validate(false));
    }

    #[test]
    fn test_wrong_field_type_is_not_corrected() {
        let mut doc = Document::new();
        let field_ref = doc.add_choice_field("choice").unwrap();
        let mut field = doc.choice_field(field_ref).unwrap();
        field.set("FT", Object::name("Tx")).unwrap();

        assert!(!field.validate(true));
        assert_eq!(field.field_type(), Some("Tx"));
    }

    #[test]
    fn test_sequence_value_on_single_select() {
        let mut doc = Document::new();
        let field_ref = doc.add_choice_field("choice").unwrap();
        let mut field = doc.choice_field(field_ref).unwrap();
        field
            .set(
                "V",
                Object::Array(vec![Object::String(b"a".to_vec()), Object::String(b"b".to_vec())]),
            )
            .unwrap();
        field.set("DV", Object::Array(vec![])).unwrap();

        assert_eq!(
            field.validation_issues(),
            vec![
                ValidationIssue::UnexpectedSequence("V"),
                ValidationIssue::UnexpectedSequence("DV")
            ]
        );
        assert!(!field.validate(false));
        assert!(matches!(field.get("V"), Some(Object::Array(_))));

        assert!(field.validate(true));
        assert_eq!(field.get("V"), Some(&Object::String(b"a".to_vec())));
        assert!(!field.has_key("DV"));
    }

    #[test]
    fn test_mixed_issues_are_all_or_nothing() {
        let mut doc = Document::new();
        let field_ref = doc.add_choice_field("choice").unwrap();
        let mut field = doc.choice_field(field_ref).unwrap();
        field.set("FT", Object::name("Btn")).unwrap();
        field
            .set("V", Object::Array(vec![Object::String(b"a".to_vec())]))
            .unwrap();
        let before = field.dict().clone();

        assert!(!field.validate(true));
        assert_eq!(field.dict(), &before);
    }
}
