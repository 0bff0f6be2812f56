pub mod extractors;
pub mod lines;
pub mod ocr;
pub mod semantics;
pub mod transliteration;

pub use extractors::FieldExtractor;
pub use lines::extract_mrz_lines;
pub use ocr::OcrCorrector;
pub use semantics::SemanticDecoder;
pub use transliteration::Transliterator;
