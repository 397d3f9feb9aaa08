//! Verifier configuration
//!
//! ```text
//! config
//! ├── error.rs             # ConfigError, ConfigResult
//! ├── verifier_config.rs   # VerifierConfig, DecisionKind
//! └── io.rs                # YAML schema v1
//! ```

pub mod error;
pub mod io;
pub mod verifier_config;

pub use error::{ConfigError, ConfigResult};
pub use verifier_config::{DecisionKind, VerifierConfig};
