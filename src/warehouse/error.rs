use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("failed to build warehouse client: {0}")]
    Client(String),

    #[error("failed to open cursor: {0}")]
    Cursor(String),
}
