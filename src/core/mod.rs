// Public modules
pub mod coerce;
pub mod date;
pub mod dict;
pub mod empty;
pub mod encoding;
pub mod environ;
pub mod error;
pub mod flag;
pub mod hash;
pub mod list;
pub mod pattern;
pub mod reflect;
pub mod registry;
pub mod slashpath;
pub mod strings;
pub mod value;
pub mod version;

// Internal modules - not part of public API
pub(crate) mod paths;

// Public modules for CLI access
pub mod defaults;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use registry::Registry;
pub use value::{Kind, Map, Record, Value};
