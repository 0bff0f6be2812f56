use super::data::MrzFormat;
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldType {
    DocumentType,
    DocumentSubtype,
    IssuingCountry,
    DocumentNumber,
    DateOfBirth,
    DateOfExpiry,
    Sex,
    NationalityCountry,
    Name,
    OptionalData1,
    OptionalData2,
    FinalCheckDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Letters,
    Digits,
    Mixed,
    SexMarker,
}

impl ContentType {
    /// Checks every non-filler character against the allowed set.
    pub fn accepts(&self, value: &str) -> bool {
        let mut chars = value.chars().filter(|c| *c != '<');
        match self {
            ContentType::Digits => chars.all(|c| c.is_ascii_digit()),
            ContentType::Letters | ContentType::SexMarker => chars.all(|c| c.is_alphabetic()),
            ContentType::Mixed => true,
        }
    }
}

/// Where a field lives inside the MRZ lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPosition {
    /// Line index, starting from 0
    pub line: usize,
    /// Character columns within the line
    pub range: Range<usize>,
}

impl FieldPosition {
    fn new(line: usize, range: Range<usize>) -> Self {
        FieldPosition { line, range }
    }
}

/// A field slice as read from the lines, possibly OCR-corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub field_type: FieldType,
    pub raw_value: String,
    pub check_digit: Option<u32>,
}

/// Every field of one MRZ after extraction, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub document_type: RawField,
    pub document_subtype: RawField,
    pub issuing_country: RawField,
    pub document_number: RawField,
    pub birthdate: RawField,
    pub expiry_date: RawField,
    pub sex: RawField,
    pub nationality: RawField,
    pub name: RawField,
    pub optional_data1: RawField,
    pub optional_data2: Option<RawField>,
}

impl RawFields {
    pub fn get(&self, field: FieldType) -> Option<&RawField> {
        match field {
            FieldType::DocumentType => Some(&self.document_type),
            FieldType::DocumentSubtype => Some(&self.document_subtype),
            FieldType::IssuingCountry => Some(&self.issuing_country),
            FieldType::DocumentNumber => Some(&self.document_number),
            FieldType::DateOfBirth => Some(&self.birthdate),
            FieldType::DateOfExpiry => Some(&self.expiry_date),
            FieldType::Sex => Some(&self.sex),
            FieldType::NationalityCountry => Some(&self.nationality),
            FieldType::Name => Some(&self.name),
            FieldType::OptionalData1 => Some(&self.optional_data1),
            FieldType::OptionalData2 => self.optional_data2.as_ref(),
            FieldType::FinalCheckDigit => None,
        }
    }

    pub fn get_mut(&mut self, field: FieldType) -> Option<&mut RawField> {
        match field {
            FieldType::DocumentType => Some(&mut self.document_type),
            FieldType::DocumentSubtype => Some(&mut self.document_subtype),
            FieldType::IssuingCountry => Some(&mut self.issuing_country),
            FieldType::DocumentNumber => Some(&mut self.document_number),
            FieldType::DateOfBirth => Some(&mut self.birthdate),
            FieldType::DateOfExpiry => Some(&mut self.expiry_date),
            FieldType::Sex => Some(&mut self.sex),
            FieldType::NationalityCountry => Some(&mut self.nationality),
            FieldType::Name => Some(&mut self.name),
            FieldType::OptionalData1 => Some(&mut self.optional_data1),
            FieldType::OptionalData2 => self.optional_data2.as_mut(),
            FieldType::FinalCheckDigit => None,
        }
    }

    /// The fields covered by the final check digit, in composite order.
    pub fn composite(&self, format: MrzFormat) -> Vec<&RawField> {
        FieldType::composite_fields(format)
            .into_iter()
            .filter_map(|field| self.get(field))
            .collect()
    }
}

impl FieldType {
    pub fn position(&self, format: MrzFormat) -> Option<FieldPosition> {
        use MrzFormat::*;

        let position = match (self, format) {
            (FieldType::DocumentType, _) => FieldPosition::new(0, 0..1),
            (FieldType::DocumentSubtype, _) => FieldPosition::new(0, 1..2),
            (FieldType::IssuingCountry, _) => FieldPosition::new(0, 2..5),

            (FieldType::DocumentNumber, TD1) => FieldPosition::new(0, 5..14),
            (FieldType::DocumentNumber, TD2 { .. } | TD3 { .. }) => FieldPosition::new(1, 0..9),

            (FieldType::DateOfBirth, TD1) => FieldPosition::new(1, 0..6),
            (FieldType::DateOfBirth, TD2 { .. } | TD3 { .. }) => FieldPosition::new(1, 13..19),

            (FieldType::Sex, TD1) => FieldPosition::new(1, 7..8),
            (FieldType::Sex, TD2 { .. } | TD3 { .. }) => FieldPosition::new(1, 20..21),

            (FieldType::DateOfExpiry, TD1) => FieldPosition::new(1, 8..14),
            (FieldType::DateOfExpiry, TD2 { .. } | TD3 { .. }) => FieldPosition::new(1, 21..27),

            (FieldType::NationalityCountry, TD1) => FieldPosition::new(1, 15..18),
            (FieldType::NationalityCountry, TD2 { .. } | TD3 { .. }) => {
                FieldPosition::new(1, 10..13)
            }

            (FieldType::Name, TD1) => FieldPosition::new(2, 0..30),
            (FieldType::Name, TD2 { .. }) => FieldPosition::new(0, 5..36),
            (FieldType::Name, TD3 { .. }) => FieldPosition::new(0, 5..44),

            // Visas have no final check digit, so optional data runs to the line end
            (FieldType::OptionalData1, TD1) => FieldPosition::new(0, 15..30),
            (FieldType::OptionalData1, TD2 { is_visa }) => {
                FieldPosition::new(1, 28..(if is_visa { 36 } else { 35 }))
            }
            (FieldType::OptionalData1, TD3 { is_visa }) => {
                FieldPosition::new(1, 28..(if is_visa { 44 } else { 42 }))
            }

            (FieldType::OptionalData2, TD1) => FieldPosition::new(1, 18..29),
            (FieldType::OptionalData2, TD2 { .. } | TD3 { .. }) => return None,

            (FieldType::FinalCheckDigit, TD1) => FieldPosition::new(1, 29..30),
            (FieldType::FinalCheckDigit, TD2 { is_visa: false }) => FieldPosition::new(1, 35..36),
            (FieldType::FinalCheckDigit, TD3 { is_visa: false }) => FieldPosition::new(1, 43..44),
            (FieldType::FinalCheckDigit, TD2 { is_visa: true } | TD3 { is_visa: true }) => {
                return None
            }
        };

        Some(position)
    }

    /// True when the field is immediately followed by its own check digit.
    pub fn has_check_digit(&self, format: MrzFormat) -> bool {
        match self {
            FieldType::DocumentNumber | FieldType::DateOfBirth | FieldType::DateOfExpiry => true,
            FieldType::OptionalData1 => matches!(format, MrzFormat::TD3 { is_visa: false }),
            FieldType::DocumentType
            | FieldType::DocumentSubtype
            | FieldType::IssuingCountry
            | FieldType::Sex
            | FieldType::NationalityCountry
            | FieldType::Name
            | FieldType::OptionalData2
            | FieldType::FinalCheckDigit => false,
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            FieldType::DocumentType
            | FieldType::DocumentSubtype
            | FieldType::IssuingCountry
            | FieldType::NationalityCountry
            | FieldType::Name => ContentType::Letters,
            FieldType::DocumentNumber | FieldType::OptionalData1 | FieldType::OptionalData2 => {
                ContentType::Mixed
            }
            FieldType::DateOfBirth | FieldType::DateOfExpiry | FieldType::FinalCheckDigit => {
                ContentType::Digits
            }
            FieldType::Sex => ContentType::SexMarker,
        }
    }

    /// Fields whose raw values and check digits feed the final check digit, in order.
    pub fn composite_fields(format: MrzFormat) -> Vec<FieldType> {
        let order = match format {
            MrzFormat::TD1 => [
                FieldType::DocumentNumber,
                FieldType::OptionalData1,
                FieldType::DateOfBirth,
                FieldType::DateOfExpiry,
                FieldType::OptionalData2,
            ],
            MrzFormat::TD2 { .. } | MrzFormat::TD3 { .. } => [
                FieldType::DocumentNumber,
                FieldType::DateOfBirth,
                FieldType::DateOfExpiry,
                FieldType::OptionalData1,
                FieldType::OptionalData2,
            ],
        };

        order
            .into_iter()
            .filter(|field| field.position(format).is_some())
            .collect()
    }
}
