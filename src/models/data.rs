use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MrzFormat {
    TD1,                    // ID card, 3 x 30
    TD2 { is_visa: bool },  // ID card / MRV-B, 2 x 36
    TD3 { is_visa: bool },  // Passport / MRV-A, 2 x 44
}

impl MrzFormat {
    pub fn lines_count(&self) -> usize {
        match self {
            MrzFormat::TD1 => 3,
            MrzFormat::TD2 { .. } => 2,
            MrzFormat::TD3 { .. } => 2,
        }
    }

    pub fn line_length(&self) -> usize {
        match self {
            MrzFormat::TD1 => 30,
            MrzFormat::TD2 { .. } => 36,
            MrzFormat::TD3 { .. } => 44,
        }
    }

    pub fn is_visa(&self) -> bool {
        match self {
            MrzFormat::TD1 => false,
            MrzFormat::TD2 { is_visa } | MrzFormat::TD3 { is_visa } => *is_visa,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentType {
    Visa,
    Passport,
    Other(char),
}

impl DocumentType {
    pub fn from_identifier(identifier: char) -> Self {
        match identifier {
            'V' => DocumentType::Visa,
            'P' => DocumentType::Passport,
            other => DocumentType::Other(other),
        }
    }

    pub fn identifier(&self) -> char {
        match self {
            DocumentType::Visa => 'V',
            DocumentType::Passport => 'P',
            DocumentType::Other(value) => *value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentSubtype {
    National,
    Other(char),
}

impl DocumentSubtype {
    pub fn from_identifier(identifier: char) -> Self {
        match identifier {
            'N' => DocumentSubtype::National,
            other => DocumentSubtype::Other(other),
        }
    }

    pub fn identifier(&self) -> char {
        match self {
            DocumentSubtype::National => 'N',
            DocumentSubtype::Other(value) => *value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
    Other(char),
}

impl Sex {
    pub fn from_identifier(identifier: char) -> Self {
        match identifier {
            'M' => Sex::Male,
            'F' => Sex::Female,
            other => Sex::Other(other),
        }
    }

    pub fn identifier(&self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
            Sex::Other(value) => *value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Country {
    Russia,
    Other(String),
}

impl Country {
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "RUS" => Country::Russia,
            other => Country::Other(other.to_string()),
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Country::Russia => "RUS",
            Country::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Names {
    pub surnames: String,
    pub given_names: Option<String>,
}

/// A fully decoded and checksum-verified machine readable zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MrzRecord {
    /// Document number, birth date and expiry date with their check digits.
    pub lookup_key: String,
    pub format: MrzFormat,
    pub document_type: DocumentType,
    pub document_subtype: Option<DocumentSubtype>,
    pub issuing_country: Country,
    pub names: Names,
    pub document_number: String,
    pub nationality_country_code: String,
    pub birthdate: NaiveDate,
    pub sex: Sex,
    pub expiry_date: Option<NaiveDate>,
    pub optional_data: Option<String>,
    pub optional_data2: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dimensions() {
        assert_eq!(MrzFormat::TD1.lines_count(), 3);
        assert_eq!(MrzFormat::TD1.line_length(), 30);
        assert_eq!(MrzFormat::TD2 { is_visa: true }.line_length(), 36);
        assert_eq!(MrzFormat::TD3 { is_visa: false }.line_length(), 44);
        assert!(MrzFormat::TD3 { is_visa: true }.is_visa());
        assert!(!MrzFormat::TD1.is_visa());
    }

    #[test]
    fn test_identifier_mapping() {
        assert_eq!(DocumentType::from_identifier('P'), DocumentType::Passport);
        assert_eq!(DocumentType::from_identifier('I'), DocumentType::Other('I'));
        assert_eq!(DocumentSubtype::from_identifier('N'), DocumentSubtype::National);
        assert_eq!(Sex::from_identifier('<'), Sex::Other('<'));
        assert_eq!(Sex::Female.identifier(), 'F');
        assert_eq!(Country::from_identifier("RUS"), Country::Russia);
        assert_eq!(Country::from_identifier("UTO").identifier(), "UTO");
    }
}
