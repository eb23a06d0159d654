pub mod csv;
pub mod date;

pub use csv::{csv_field, csv_line};
pub use date::{format_display_date, parse_date};
