use chrono::{Local, NaiveDate};

pub const DEFAULT_SEARCH_LIMIT: usize = 1 << 20;

/// Settings for one `MrzDecoder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Repair common OCR misreadings before giving up on a field
    pub ocr_correction: bool,
    /// "Today", used to pick the century of two-digit years
    pub current_date: NaiveDate,
    /// Maximum number of combinations one correction search may evaluate
    pub search_limit: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            ocr_correction: true,
            current_date: Local::now().date_naive(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl DecoderConfig {
    pub fn with_ocr_correction(mut self, ocr_correction: bool) -> Self {
        self.ocr_correction = ocr_correction;
        self
    }

    pub fn with_current_date(mut self, current_date: NaiveDate) -> Self {
        self.current_date = current_date;
        self
    }

    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }
}
