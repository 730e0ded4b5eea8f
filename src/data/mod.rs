pub mod catalog;
pub mod isotopes;
pub mod spectrum;
