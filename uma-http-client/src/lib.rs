//! UMA HTTP Client Library
//!
//! An async client for the unofficial Marvel Contest of Champions game-data
//! API, fetching champions, war map nodes and war tiers.
//!
//! # Features
//!
//! - One shared connection pool per client, safe to use from concurrent tasks
//! - Strongly typed records, validated on construction
//! - A closed error enum, so callers can match every failure kind
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Runtime agnostic: the client never spawns or captures a runtime
//!
//! # Example
//!
//! ```no_run
//! use uma_http_client::{UmaClient, UmaError};
//!
//! # async fn run() -> Result<(), UmaError> {
//! let client = UmaClient::new()?;
//!
//! match client.get_war(3).await {
//!     Ok(war) => println!("Tier {} is {}", war.tier, war.difficulty),
//!     Err(UmaError::Api) => println!("The API is having trouble"),
//!     Err(e) => println!("No luck: {}", e),
//! }
//!
//! client.close();
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;
mod route;

pub use client::{DEFAULT_BASE_URL, UmaClient, UmaClientBuilder};
pub use error::{API_ERROR_MESSAGE, Resource, UmaError};
pub use models::{Champion, Node, War};
