//! Term Model
//!
//! Arithmetic terms and boolean formulas over program variables, plus the
//! converter from program expressions.
//!
//! ```text
//! term
//! ├── domain/           # Term, Formula (pure values)
//! └── infrastructure/   # Exp → Term converter
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{Formula, Term};
pub use infrastructure::{convert, convert_lval, ConversionError, ConversionResult};
