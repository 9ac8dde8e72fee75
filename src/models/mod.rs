pub mod entry;
pub mod figures;
pub mod restriction;
pub mod term;
