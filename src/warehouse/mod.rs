pub use self::client::{Cursor, WarehouseClient};
pub use self::error::WarehouseError;

pub mod client;
pub mod error;
