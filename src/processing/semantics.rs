// Turns validated raw fields into typed record values
use chrono::NaiveDate;
use log::debug;
use crate::models::{
    ContentType, Country, DocumentRules, DocumentSubtype, DocumentType, FieldType, MrzFormat,
    MrzRecord, Names, RawField, RawFields, Sex,
};
use crate::processing::{OcrCorrector, Transliterator};
use crate::utils::MrzError;
use crate::validation::{DateKind, DateValidator};

// Russian national passports move one digit of the series into the optional data
const HIDDEN_DIGIT_INDEX: usize = 3;

pub struct SemanticDecoder {
    today: NaiveDate,
    ocr_correction: bool,
}

impl SemanticDecoder {
    pub fn new(today: NaiveDate, ocr_correction: bool) -> Self {
        SemanticDecoder {
            today,
            ocr_correction,
        }
    }

    pub fn decode(
        &self,
        format: MrzFormat,
        rules: DocumentRules,
        fields: &RawFields,
    ) -> Result<MrzRecord, MrzError> {
        let hidden_digit = if rules.is_russian_national_passport() {
            Self::hidden_digit(&fields.optional_data1)
        } else {
            None
        };
        let document_number = Self::document_number(&fields.document_number, hidden_digit)?;

        let record = MrzRecord {
            lookup_key: Self::lookup_key(
                &document_number,
                &fields.document_number,
                &fields.birthdate,
                &fields.expiry_date,
            ),
            format,
            document_type: DocumentType::from_identifier(Self::first_char(
                &fields.document_type,
            )?),
            document_subtype: Self::document_subtype(&fields.document_subtype),
            issuing_country: Country::from_identifier(&Self::mandatory_text(
                &fields.issuing_country,
            )?),
            names: self.names(&fields.name, rules)?,
            document_number,
            nationality_country_code: Self::mandatory_text(&fields.nationality)?,
            birthdate: DateValidator::parse(&fields.birthdate.raw_value, DateKind::Birth, self.today)?,
            sex: Self::sex(&fields.sex),
            expiry_date: self.expiry_date(&fields.expiry_date)?,
            optional_data: Self::optional_text(&fields.optional_data1.raw_value),
            optional_data2: fields
                .optional_data2
                .as_ref()
                .and_then(|field| Self::optional_text(&field.raw_value)),
        };

        debug!("Decoded record {}", record.lookup_key);
        Ok(record)
    }

    /// Trims fillers at both ends and turns inner fillers into spaces.
    pub fn text(raw_value: &str) -> String {
        raw_value.trim_matches('<').replace('<', " ")
    }

    fn optional_text(raw_value: &str) -> Option<String> {
        let value = Self::text(raw_value);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn mandatory_text(field: &RawField) -> Result<String, MrzError> {
        Self::optional_text(&field.raw_value).ok_or(MrzError::MissingField(field.field_type))
    }

    fn first_char(field: &RawField) -> Result<char, MrzError> {
        Self::mandatory_text(field)?
            .chars()
            .next()
            .ok_or(MrzError::MissingField(field.field_type))
    }

    fn document_subtype(field: &RawField) -> Option<DocumentSubtype> {
        field
            .raw_value
            .chars()
            .next()
            .filter(|c| *c != '<')
            .map(DocumentSubtype::from_identifier)
    }

    fn sex(field: &RawField) -> Sex {
        Sex::from_identifier(field.raw_value.chars().next().unwrap_or('<'))
    }

    fn hidden_digit(optional_data: &RawField) -> Option<char> {
        optional_data
            .raw_value
            .chars()
            .next()
            .filter(|c| c.is_ascii_digit())
    }

    fn document_number(field: &RawField, hidden_digit: Option<char>) -> Result<String, MrzError> {
        let mut value = Self::mandatory_text(field)?;
        if let Some(digit) = hidden_digit {
            let index = value
                .char_indices()
                .nth(HIDDEN_DIGIT_INDEX)
                .map_or(value.len(), |(index, _)| index);
            value.insert(index, digit);
            debug!("Restored hidden series digit: {}", value);
        }
        Ok(value)
    }

    fn names(&self, field: &RawField, rules: DocumentRules) -> Result<Names, MrzError> {
        let value = if rules.is_russian_national_passport() {
            let converted = Transliterator::to_cyrillic(&field.raw_value);
            if self.ocr_correction {
                // Digits left over after conversion are misread Latin letters
                Transliterator::to_cyrillic(&OcrCorrector::correct(&converted, ContentType::Letters))
            } else {
                converted
            }
        } else {
            field.raw_value.clone()
        };

        let value = value.trim_matches('<');
        let (surnames, given_names) = match value.split_once("<<") {
            Some((surnames, given_names)) => (surnames, Some(given_names)),
            None => (value, None),
        };

        let surnames = Self::text(surnames);
        if surnames.is_empty() {
            return Err(MrzError::MissingField(FieldType::Name));
        }

        Ok(Names {
            surnames,
            given_names: given_names.and_then(Self::optional_text),
        })
    }

    fn expiry_date(&self, field: &RawField) -> Result<Option<NaiveDate>, MrzError> {
        if field.raw_value.chars().all(|c| c == '<') {
            return Ok(None);
        }
        DateValidator::parse(&field.raw_value, DateKind::Expiry, self.today).map(Some)
    }

    fn lookup_key(
        document_number: &str,
        number: &RawField,
        birthdate: &RawField,
        expiry_date: &RawField,
    ) -> String {
        format!(
            "{}{}{}",
            Self::with_check_digit(document_number, number),
            Self::with_check_digit(&birthdate.raw_value, birthdate),
            Self::with_check_digit(&expiry_date.raw_value, expiry_date)
        )
    }

    fn with_check_digit(value: &str, field: &RawField) -> String {
        match field.check_digit {
            Some(check_digit) => format!("{}{}", value, check_digit),
            None => value.to_string(),
        }
    }
}
