use std::collections::HashMap;
use lazy_static::lazy_static;

lazy_static! {
    // Latin encoding of Cyrillic used in the name field of Russian national passports
    static ref CYRILLIC: HashMap<char, char> = [
        ('A', 'А'), ('B', 'Б'), ('V', 'В'), ('G', 'Г'), ('D', 'Д'), ('E', 'Е'),
        ('2', 'Ё'), ('J', 'Ж'), ('Z', 'З'), ('I', 'И'), ('Q', 'Й'), ('K', 'К'),
        ('L', 'Л'), ('M', 'М'), ('N', 'Н'), ('O', 'О'), ('P', 'П'), ('R', 'Р'),
        ('S', 'С'), ('T', 'Т'), ('U', 'У'), ('F', 'Ф'), ('H', 'Х'), ('C', 'Ц'),
        ('3', 'Ч'), ('4', 'Ш'), ('W', 'Щ'), ('X', 'Ъ'), ('Y', 'Ы'), ('9', 'Ь'),
        ('6', 'Э'), ('7', 'Ю'), ('8', 'Я'),
    ]
    .into_iter()
    .collect();
}

pub struct Transliterator;

impl Transliterator {
    /// Maps each encoded character to its Cyrillic letter. Fillers and
    /// characters outside the table pass through unchanged.
    pub fn to_cyrillic(value: &str) -> String {
        value
            .chars()
            .map(|c| CYRILLIC.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_name() {
        assert_eq!(Transliterator::to_cyrillic("IVANOV<<IVAN"), "ИВАНОВ<<ИВАН");
        assert_eq!(Transliterator::to_cyrillic("IVANOVI3"), "ИВАНОВИЧ");
        assert_eq!(Transliterator::to_cyrillic("F8DOR"), "ФЯДОР");
        assert_eq!(Transliterator::to_cyrillic("S6M"), "СЭМ");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(Transliterator::to_cyrillic("IVAN0V"), "ИВАН0В");
        assert_eq!(Transliterator::to_cyrillic("<"), "<");
    }
}
