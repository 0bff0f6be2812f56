// Field slicing, direct OCR correction and per-field check digit validation
use crate::models::{ContentType, DocumentRules, FieldType, MrzFormat, RawField};
use crate::processing::OcrCorrector;
use crate::utils::MrzError;
use crate::validation::MrzValidator;
use log::{debug, info};

/// Reads raw fields out of MRZ lines of an already detected format.
pub struct FieldExtractor {
    lines: Vec<Vec<char>>,
    format: MrzFormat,
    rules: DocumentRules,
    ocr_correction: bool,
    search_limit: usize,
}

impl FieldExtractor {
    pub fn new<S: AsRef<str>>(
        lines: &[S],
        format: MrzFormat,
        ocr_correction: bool,
        search_limit: usize,
    ) -> Self {
        FieldExtractor {
            lines: lines.iter().map(|line| line.as_ref().chars().collect()).collect(),
            format,
            rules: DocumentRules::default(),
            ocr_correction,
            search_limit,
        }
    }

    /// Switches content expectations once the document header is known.
    pub fn set_rules(&mut self, rules: DocumentRules) {
        self.rules = rules;
    }

    /// Extracts a field, corrects it towards its content type and validates its own check digit.
    pub fn extract(&self, field: FieldType) -> Result<RawField, MrzError> {
        let position = field
            .position(self.format)
            .ok_or(MrzError::MissingField(field))?;
        let content_type = self.rules.content_type(field);

        let mut raw_value = self.slice(position.line, position.range.clone(), field)?;
        if self.ocr_correction && content_type != ContentType::Mixed {
            let corrected = OcrCorrector::correct(&raw_value, content_type);
            if corrected != raw_value {
                info!("Corrected {:?}: {} -> {}", field, raw_value, corrected);
                raw_value = corrected;
            }
        }

        if !content_type.accepts(&raw_value) {
            return Err(MrzError::InvalidContent {
                field,
                value: raw_value,
            });
        }

        if !field.has_check_digit(self.format) {
            debug!("{:?}: {:?}", field, raw_value);
            return Ok(RawField {
                field_type: field,
                raw_value,
                check_digit: None,
            });
        }

        let check_digit = match self.read_check_digit(position.line, position.range.end) {
            Some(check_digit) => check_digit,
            // An empty optional field may leave its check digit as a filler too
            None if Self::is_optional(field)
                && raw_value.chars().all(|c| c == '<')
                && self.char_at(position.line, position.range.end) == Some('<') =>
            {
                0
            }
            None => return Err(MrzError::MissingCheckDigit(field)),
        };
        debug!("{:?}: {:?} check digit {}", field, raw_value, check_digit);

        if !MrzValidator::is_value_valid(&raw_value, check_digit) {
            if !(self.ocr_correction && content_type == ContentType::Mixed) {
                return Err(MrzError::ChecksumMismatch {
                    field: Some(field),
                    correction_attempted: self.ocr_correction,
                });
            }

            let repaired = OcrCorrector::find_matching_strings(
                &[raw_value.clone()],
                self.search_limit,
                |candidate| MrzValidator::is_value_valid(&candidate[0], check_digit),
            )
            .and_then(|strings| strings.into_iter().next())
            .ok_or(MrzError::ChecksumMismatch {
                field: Some(field),
                correction_attempted: true,
            })?;

            info!("Repaired {:?}: {} -> {}", field, raw_value, repaired);
            raw_value = repaired;
        }

        Ok(RawField {
            field_type: field,
            raw_value,
            check_digit: Some(check_digit),
        })
    }

    /// The final (composite) check digit, or `None` for formats that have none.
    pub fn final_check_digit(&self) -> Result<Option<u32>, MrzError> {
        let position = match FieldType::FinalCheckDigit.position(self.format) {
            Some(position) => position,
            None => return Ok(None),
        };

        self.read_check_digit(position.line, position.range.start)
            .map(Some)
            .ok_or(MrzError::MissingCheckDigit(FieldType::FinalCheckDigit))
    }

    fn is_optional(field: FieldType) -> bool {
        matches!(field, FieldType::OptionalData1 | FieldType::OptionalData2)
    }

    fn char_at(&self, line: usize, index: usize) -> Option<char> {
        self.lines.get(line)?.get(index).copied()
    }

    fn read_check_digit(&self, line: usize, index: usize) -> Option<u32> {
        let c = self.char_at(line, index)?;
        let c = if self.ocr_correction {
            OcrCorrector::correct_digit(c)
        } else {
            c
        };
        c.to_digit(10)
    }

    fn slice(
        &self,
        line: usize,
        range: std::ops::Range<usize>,
        field: FieldType,
    ) -> Result<String, MrzError> {
        self.lines
            .get(line)
            .and_then(|chars| chars.get(range))
            .map(|chars| chars.iter().collect())
            .ok_or(MrzError::MissingField(field))
    }
}
