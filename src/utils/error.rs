use crate::models::FieldType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MrzError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unknown MRZ format: {lines} line(s) of {length} characters")]
    UnknownFormat { lines: usize, length: usize },

    #[error("Invalid content in {field:?}: {value:?}")]
    InvalidContent { field: FieldType, value: String },

    #[error("Missing or unreadable check digit for {0:?}")]
    MissingCheckDigit(FieldType),

    #[error("Missing field: {0:?}")]
    MissingField(FieldType),

    #[error("Checksum mismatch in {} (OCR correction attempted: {correction_attempted})", describe_scope(.field))]
    ChecksumMismatch {
        /// `None` for the composite (final) check digit.
        field: Option<FieldType>,
        correction_attempted: bool,
    },

    #[error("Invalid date in {field:?}: {value:?}")]
    InvalidDate { field: FieldType, value: String },
}

impl MrzError {
    /// Line layout problems that no amount of character correction can fix.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            MrzError::MalformedInput(_) | MrzError::UnknownFormat { .. }
        )
    }

    pub fn correction_attempted(&self) -> bool {
        matches!(
            self,
            MrzError::ChecksumMismatch {
                correction_attempted: true,
                ..
            }
        )
    }
}

fn describe_scope(field: &Option<FieldType>) -> String {
    match field {
        Some(field) => format!("{:?}", field),
        None => "composite check digit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_errors() {
        assert!(MrzError::MalformedInput("empty".to_string()).is_structural());
        assert!(MrzError::UnknownFormat { lines: 4, length: 30 }.is_structural());
        assert!(!MrzError::MissingField(FieldType::Name).is_structural());
    }

    #[test]
    fn test_correction_attempted() {
        let attempted = MrzError::ChecksumMismatch {
            field: None,
            correction_attempted: true,
        };
        let plain = MrzError::ChecksumMismatch {
            field: Some(FieldType::DocumentNumber),
            correction_attempted: false,
        };
        assert!(attempted.correction_attempted());
        assert!(!plain.correction_attempted());
        assert!(attempted.to_string().contains("composite check digit"));
        assert!(plain.to_string().contains("DocumentNumber"));
    }
}
