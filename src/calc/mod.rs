pub mod dbe;
pub mod scale;
