//! Async client for the internship applications API.
//!
//! ```no_run
//! # async fn run() -> Result<(), internship_api::Error> {
//! use internship_api::{Client, ClientConfig};
//!
//! let client = Client::new(ClientConfig::from_env())?;
//! let stats = client.get_application_stats().await?;
//! println!("{} applications", stats.total_applications);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod errors;
mod response;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::response::classify_error_body;
