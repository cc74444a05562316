pub use self::parser::{Config, LoggingConfig, WarehouseConfig};
pub use self::validator::ConfigError;

mod parser;
mod validator;
