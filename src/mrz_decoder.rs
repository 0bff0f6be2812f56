use crate::config::DecoderConfig;
use crate::models::*;
use crate::processing::*;
use crate::utils::MrzError;
use crate::validation::*;
use log::{debug, info, warn};

/// Decodes MRZ lines into an `MrzRecord`. Holds no state besides its configuration,
/// so one decoder can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct MrzDecoder {
    config: DecoderConfig,
}

impl MrzDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        MrzDecoder { config }
    }

    // Main decoding function that orchestrates the entire process
    pub fn decode<S: AsRef<str>>(&self, lines: &[S]) -> Result<MrzRecord, MrzError> {
        // Step 1: Detect the layout
        let format = FormatValidator::detect(lines)?;
        let mut extractor = FieldExtractor::new(
            lines,
            format,
            self.config.ocr_correction,
            self.config.search_limit,
        );

        // Step 2: Read the header and pick the issuer rules
        let document_type = extractor.extract(FieldType::DocumentType)?;
        let document_subtype = extractor.extract(FieldType::DocumentSubtype)?;
        let issuing_country = extractor.extract(FieldType::IssuingCountry)?;

        let rules = Self::resolve_rules(&document_type, &document_subtype, &issuing_country);
        if rules.is_russian_national_passport() {
            debug!("Russian national passport detected");
        }
        extractor.set_rules(rules);

        // Step 3: Extract the remaining fields
        let document_number = extractor.extract(FieldType::DocumentNumber)?;
        let birthdate = extractor.extract(FieldType::DateOfBirth)?;
        let expiry_date = extractor.extract(FieldType::DateOfExpiry)?;
        let sex = extractor.extract(FieldType::Sex)?;
        let nationality = extractor.extract(FieldType::NationalityCountry)?;
        let name = extractor.extract(FieldType::Name)?;
        let optional_data1 = extractor.extract(FieldType::OptionalData1)?;
        let optional_data2 = match FieldType::OptionalData2.position(format) {
            Some(_) => Some(extractor.extract(FieldType::OptionalData2)?),
            None => None,
        };

        let mut fields = RawFields {
            document_type,
            document_subtype,
            issuing_country,
            document_number,
            birthdate,
            expiry_date,
            sex,
            nationality,
            name,
            optional_data1,
            optional_data2,
        };

        // Step 4: Verify the final check digit, repairing the composite if allowed
        if let Some(final_check_digit) = extractor.final_check_digit()? {
            self.verify_composite(format, rules, &mut fields, final_check_digit)?;
        }

        // Step 5: Decode values
        SemanticDecoder::new(self.config.current_date, self.config.ocr_correction)
            .decode(format, rules, &fields)
    }

    /// Splits `text` into lines and decodes them. A trailing `\r` on each line and
    /// trailing empty lines are ignored.
    pub fn decode_str(&self, text: &str) -> Result<MrzRecord, MrzError> {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }
        self.decode(&lines)
    }

    fn resolve_rules(
        document_type: &RawField,
        document_subtype: &RawField,
        issuing_country: &RawField,
    ) -> DocumentRules {
        let document_type = document_type
            .raw_value
            .chars()
            .next()
            .map(DocumentType::from_identifier);
        let document_subtype = document_subtype
            .raw_value
            .chars()
            .next()
            .filter(|c| *c != '<')
            .map(DocumentSubtype::from_identifier);

        match document_type {
            Some(document_type) => DocumentRules::resolve(
                document_type,
                document_subtype,
                &Country::from_identifier(&issuing_country.raw_value),
            ),
            None => DocumentRules::default(),
        }
    }

    fn verify_composite(
        &self,
        format: MrzFormat,
        rules: DocumentRules,
        fields: &mut RawFields,
        final_check_digit: u32,
    ) -> Result<(), MrzError> {
        let members: Vec<RawField> = fields.composite(format).into_iter().cloned().collect();
        if MrzValidator::is_composite_valid(&members, final_check_digit) {
            return Ok(());
        }

        if !self.config.ocr_correction {
            warn!("Composite check digit mismatch");
            return Err(MrzError::ChecksumMismatch {
                field: None,
                correction_attempted: false,
            });
        }

        // Only free-form fields are searched; letters and digits were already corrected directly
        let searched: Vec<usize> = (0..members.len())
            .filter(|&index| rules.content_type(members[index].field_type) == ContentType::Mixed)
            .collect();
        let values: Vec<String> = searched
            .iter()
            .map(|&index| members[index].raw_value.clone())
            .collect();

        let repaired = OcrCorrector::find_matching_strings(&values, self.config.search_limit, |candidate| {
            let mut substituted = members.clone();
            for (&index, value) in searched.iter().zip(candidate) {
                let member = &mut substituted[index];
                // A field with its own check digit must stay valid
                if let Some(check_digit) = member.check_digit {
                    if *value != member.raw_value && !MrzValidator::is_value_valid(value, check_digit) {
                        return false;
                    }
                }
                member.raw_value = value.clone();
            }
            MrzValidator::is_composite_valid(&substituted, final_check_digit)
        });

        let repaired = match repaired {
            Some(repaired) => repaired,
            None => {
                warn!("Composite check digit mismatch after OCR correction");
                return Err(MrzError::ChecksumMismatch {
                    field: None,
                    correction_attempted: true,
                });
            }
        };

        for (&index, value) in searched.iter().zip(repaired) {
            let member = &members[index];
            if value == member.raw_value {
                continue;
            }
            info!("Repaired {:?}: {} -> {}", member.field_type, member.raw_value, value);
            if let Some(field) = fields.get_mut(member.field_type) {
                field.raw_value = value;
            }
        }
        Ok(())
    }
}
