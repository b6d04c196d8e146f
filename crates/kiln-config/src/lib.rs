pub mod bundle;
pub mod env;
pub mod error;
pub mod mode;
pub mod project;
pub mod resolver;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use env::{EnvLoader, EnvironmentSnapshot, DEFAULT_ENV_PREFIX, PROJECT_ID_VAR};
pub use error::*;
pub use mode::BuildMode;
pub use project::ProjectLayout;
pub use resolver::{resolve, ConfigResolver};

// Re-export validation
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
