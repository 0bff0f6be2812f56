pub mod data;
pub mod fields;
pub mod rules;

pub use data::*;
pub use fields::*;
pub use rules::DocumentRules;
