pub mod add;
pub mod aggregate;
pub mod calendar;
pub mod del;
pub mod log;
pub mod logic;
pub mod paid;
pub mod restriction;
pub mod settings;
pub mod term;
