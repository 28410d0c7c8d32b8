//! Calendar day values.

mod parse;
mod value;

pub use value::{DateInput, DateSource, DateValue, INVALID_DATE};
