pub mod config;
pub mod reading;
pub mod server;

pub use config::ConfigError;
pub use reading::ReadingError;
pub use server::ServerError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Reading(#[from] reading::ReadingError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Server(#[from] server::ServerError),
}
