use crate::models::RawField;

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// ICAO 9303 check digit arithmetic.
pub struct MrzValidator;

impl MrzValidator {
    // <  A   B   C   ...  Z
    // 0  10  11  12  ...  35
    pub fn char_value(c: char) -> Option<u32> {
        match c {
            '<' => Some(0),
            '0'..='9' => c.to_digit(10),
            'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
            _ => None,
        }
    }

    /// Weighted modulo-10 sum, or `None` if the value holds a character outside the MRZ alphabet.
    pub fn check_digit(value: &str) -> Option<u32> {
        let mut sum = 0;
        for (index, c) in value.chars().enumerate() {
            sum += Self::char_value(c)? * WEIGHTS[index % 3];
        }
        Some(sum % 10)
    }

    pub fn is_value_valid(value: &str, check_digit: u32) -> bool {
        Self::check_digit(value) == Some(check_digit)
    }

    /// Concatenation of each field's raw value followed by its check digit, if any.
    pub fn composite_value<'a>(fields: impl IntoIterator<Item = &'a RawField>) -> String {
        let mut composite = String::new();
        for field in fields {
            composite.push_str(&field.raw_value);
            if let Some(check_digit) = field.check_digit {
                composite.push_str(&check_digit.to_string());
            }
        }
        composite
    }

    pub fn is_composite_valid<'a>(
        fields: impl IntoIterator<Item = &'a RawField>,
        final_check_digit: u32,
    ) -> bool {
        Self::is_value_valid(&Self::composite_value(fields), final_check_digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;

    fn field(field_type: FieldType, raw_value: &str, check_digit: Option<u32>) -> RawField {
        RawField {
            field_type,
            raw_value: raw_value.to_string(),
            check_digit,
        }
    }

    #[test]
    fn test_char_values() {
        assert_eq!(MrzValidator::char_value('<'), Some(0));
        assert_eq!(MrzValidator::char_value('7'), Some(7));
        assert_eq!(MrzValidator::char_value('A'), Some(10));
        assert_eq!(MrzValidator::char_value('Z'), Some(35));
        assert_eq!(MrzValidator::char_value('a'), None);
        assert_eq!(MrzValidator::char_value('Д'), None);
    }

    #[test]
    fn test_check_digits_from_icao_samples() {
        assert_eq!(MrzValidator::check_digit("L898902C3"), Some(6));
        assert_eq!(MrzValidator::check_digit("740812"), Some(2));
        assert_eq!(MrzValidator::check_digit("120415"), Some(9));
        assert_eq!(MrzValidator::check_digit("ZE184226B<<<<<"), Some(1));
        assert_eq!(MrzValidator::check_digit("D23145890"), Some(7));
        assert_eq!(MrzValidator::check_digit(""), Some(0));
    }

    #[test]
    fn test_is_value_valid() {
        let raw_value = "S12345678<";
        assert!(MrzValidator::is_value_valid(raw_value, 0));
        assert!(!MrzValidator::is_value_valid(raw_value, 36));
    }

    #[test]
    fn test_unparsable_character_fails_instead_of_panicking() {
        assert_eq!(MrzValidator::check_digit("L8989O2c3"), None);
        assert!(!MrzValidator::is_value_valid("😄", 0));
    }

    #[test]
    fn test_composite() {
        let fields = vec![
            field(FieldType::DocumentNumber, "S123456<", Some(1)),
            field(FieldType::OptionalData2, "G<5678", None),
        ];
        assert_eq!(MrzValidator::composite_value(&fields), "S123456<1G<5678");
        assert!(MrzValidator::is_composite_valid(&fields, 0));
        assert!(!MrzValidator::is_composite_valid(&fields, 6));
    }

    #[test]
    fn test_td3_composite_round_trip() {
        let fields = vec![
            field(FieldType::DocumentNumber, "L898902C3", Some(6)),
            field(FieldType::DateOfBirth, "740812", Some(2)),
            field(FieldType::DateOfExpiry, "120415", Some(9)),
            field(FieldType::OptionalData1, "ZE184226B<<<<<", Some(1)),
        ];
        assert!(MrzValidator::is_composite_valid(&fields, 0));
    }
}
