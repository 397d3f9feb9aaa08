//! VC Builder & Decision Seam
//!
//! ```text
//! vc
//! ├── ports/            # DecisionProcedure
//! └── infrastructure/
//!     ├── vc_builder    # obligation ∧ gathered facts
//!     └── decision      # AssumeValid, RejectAll
//! ```

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{build_vc, obligation, AssumeValid, RejectAll};
pub use ports::DecisionProcedure;
