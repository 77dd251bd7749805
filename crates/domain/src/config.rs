mod errors;
mod resolver;
mod root;

pub use errors::ConfigError;
pub use resolver::{QueryStrategy, ResolverConfig};
pub use root::{CliOverrides, Config, LoggingConfig};
