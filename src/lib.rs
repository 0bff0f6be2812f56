pub mod config;
pub mod models;
pub mod mrz_decoder;
pub mod processing;
pub mod utils;
pub mod validation;

pub use config::DecoderConfig;
pub use models::{
    Country, DocumentSubtype, DocumentType, MrzFormat, MrzRecord, Names, Sex,
};
pub use mrz_decoder::MrzDecoder;
pub use utils::MrzError;

/// Decodes MRZ lines with the default configuration.
pub fn decode<S: AsRef<str>>(lines: &[S], ocr_correction: bool) -> Result<MrzRecord, MrzError> {
    MrzDecoder::new(DecoderConfig::default().with_ocr_correction(ocr_correction)).decode(lines)
}

/// Decodes newline-separated MRZ text with the default configuration.
pub fn decode_str(text: &str, ocr_correction: bool) -> Result<MrzRecord, MrzError> {
    MrzDecoder::new(DecoderConfig::default().with_ocr_correction(ocr_correction)).decode_str(text)
}
