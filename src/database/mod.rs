pub mod bets;
pub mod bolaos;
pub mod connection;
pub mod fixtures;
pub mod members;
pub mod models;
pub mod setup;
pub mod standings;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
