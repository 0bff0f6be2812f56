use crate::models::MrzFormat;
use crate::utils::MrzError;
use log::debug;

pub struct FormatValidator;

impl FormatValidator {
    /// Infers the MRZ layout from the line count and the shared line length.
    pub fn detect<S: AsRef<str>>(lines: &[S]) -> Result<MrzFormat, MrzError> {
        let first_line = lines
            .first()
            .ok_or_else(|| MrzError::MalformedInput("no MRZ lines".to_string()))?
            .as_ref();

        // MRV-A and MRV-B visas share the TD3 and TD2 line layouts
        let is_visa = first_line.starts_with('V');
        let candidates = match lines.len() {
            3 => vec![MrzFormat::TD1],
            2 => vec![MrzFormat::TD2 { is_visa }, MrzFormat::TD3 { is_visa }],
            _ => Vec::new(),
        };

        let length = Self::uniform_line_length(lines)?;

        let format = candidates
            .into_iter()
            .find(|format| format.line_length() == length)
            .ok_or(MrzError::UnknownFormat {
                lines: lines.len(),
                length,
            })?;

        debug!("Detected MRZ format {:?}", format);
        Ok(format)
    }

    fn uniform_line_length<S: AsRef<str>>(lines: &[S]) -> Result<usize, MrzError> {
        let mut lengths = lines.iter().map(|line| line.as_ref().chars().count());
        let length = lengths.next().unwrap_or(0);

        if lengths.any(|other| other != length) {
            return Err(MrzError::MalformedInput(format!(
                "MRZ lines differ in length: {:?}",
                lines
                    .iter()
                    .map(|line| line.as_ref().chars().count())
                    .collect::<Vec<_>>()
            )));
        }

        Ok(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_td1() {
        let lines = [
            "I<UTOD231458907<<<<<<<<<<<<<<<",
            "7408122F1204159UTO<<<<<<<<<<<6",
            "ERIKSSON<<ANNA<MARIA<<<<<<<<<<",
        ];
        assert_eq!(FormatValidator::detect(&lines), Ok(MrzFormat::TD1));
    }

    #[test]
    fn test_detect_two_line_formats() {
        let td2 = [
            "IRUTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<",
            "D231458907UTO7408122F1204159<<<<<<<6",
        ];
        assert_eq!(
            FormatValidator::detect(&td2),
            Ok(MrzFormat::TD2 { is_visa: false })
        );

        let mrv_a = [
            "V<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L8988901C4XXX4009078F96121096ZE184226B<<<<<<",
        ];
        assert_eq!(
            FormatValidator::detect(&mrv_a),
            Ok(MrzFormat::TD3 { is_visa: true })
        );
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let lines: [&str; 0] = [];
        assert!(matches!(
            FormatValidator::detect(&lines),
            Err(MrzError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_non_uniform_lines_are_malformed() {
        let lines = [
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408122F1204159ZE184226B<<<<<1",
        ];
        assert!(matches!(
            FormatValidator::detect(&lines),
            Err(MrzError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_unknown_formats() {
        let td1_length_in_two_lines = ["I<UTOD231458907<<<<<<<<<<<<<<<", "7408122F1204159UTO<<<<<<<<<<<6"];
        assert_eq!(
            FormatValidator::detect(&td1_length_in_two_lines),
            Err(MrzError::UnknownFormat { lines: 2, length: 30 })
        );

        let four_lines = ["<<<<", "<<<<", "<<<<", "<<<<"];
        assert_eq!(
            FormatValidator::detect(&four_lines),
            Err(MrzError::UnknownFormat { lines: 4, length: 4 })
        );
    }
}
