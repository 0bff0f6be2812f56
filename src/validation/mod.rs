pub mod dates;
pub mod format;
pub mod mrz;

pub use dates::{DateKind, DateValidator};
pub use format::FormatValidator;
pub use mrz::MrzValidator;
