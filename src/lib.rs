#![forbid(unsafe_code)]
#![deny(clippy::all)]

pub mod types;
pub mod error;
pub mod config;
pub mod board;
pub mod session;
pub mod store;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, FlatBoard, FlatGrid, MatrixBoard, MatrixGrid, TileGrid};
pub use crate::config::Configuration;
pub use crate::error::{
    ConfigError, FormatError, InvalidConfiguration, PositionOutOfBoard, SessionError,
};
pub use crate::session::{Catalog, Session, SessionState};
pub use crate::store::ConfigurationStore;
pub use crate::types::{Direction, EMPTY, SIZE};
