//! Client configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or ClientBuilder
//!     → loader.rs (parse & deserialize, env fallback for the key)
//!     → validation.rs (semantic checks, endpoint normalization)
//!     → ClientConfig (validated, immutable)
//!     → owned by Client, shared read-only across calls
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a Client is built
//! - Every field except the API key has a default
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with_env, ConfigError};
pub use schema::ClientConfig;
pub use validation::{normalize_endpoint, validate_config, ValidationError};
