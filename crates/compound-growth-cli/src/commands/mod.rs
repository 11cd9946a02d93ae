pub mod growth;
pub mod sweep;
