use super::data::{Country, DocumentSubtype, DocumentType};
use super::fields::{ContentType, FieldType};

/// Issuer-specific decoding rules, resolved from the first line header.
///
/// Only the Russian national (internal) passport deviates from ICAO 9303:
/// its name is Cyrillic transliterated into Latin letters and digits, and
/// one digit of the document series is moved into the optional data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentRules {
    #[default]
    Icao,
    RussianNationalPassport,
}

impl DocumentRules {
    pub fn resolve(
        document_type: DocumentType,
        document_subtype: Option<DocumentSubtype>,
        issuing_country: &Country,
    ) -> Self {
        match (document_type, document_subtype, issuing_country) {
            (DocumentType::Passport, Some(DocumentSubtype::National), Country::Russia) => {
                DocumentRules::RussianNationalPassport
            }
            _ => DocumentRules::Icao,
        }
    }

    pub fn content_type(&self, field: FieldType) -> ContentType {
        match (self, field) {
            (DocumentRules::RussianNationalPassport, FieldType::Name) => ContentType::Mixed,
            (
                DocumentRules::RussianNationalPassport,
                FieldType::DocumentNumber | FieldType::OptionalData1,
            ) => ContentType::Digits,
            _ => field.content_type(),
        }
    }

    pub fn is_russian_national_passport(&self) -> bool {
        matches!(self, DocumentRules::RussianNationalPassport)
    }
}
