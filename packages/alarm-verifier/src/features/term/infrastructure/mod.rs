pub mod converter;

pub use converter::{convert, convert_lval, ConversionError, ConversionResult};
