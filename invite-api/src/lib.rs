//! Data model and REST client for the graduation invitation backend.
//!
//! The backend owns every record; this crate only reads snapshots:
//!
//! - `POST /api/init-data` seeds the sample friends and ceremony info
//! - `GET /api/friends` lists invitees
//! - `GET /api/friends/{id}` returns one invitee
//! - `GET /api/graduation-info` returns the ceremony metadata
//!
//! # Usage
//!
//! ```no_run
//! use invite_api::{ApiClient, ApiConfig};
//!
//! # async fn run() -> Result<(), invite_api::ApiError> {
//! let client = ApiClient::new(ApiConfig::new("https://invite.example.com")?);
//! client.init_data().await?;
//! for friend in client.friends().await? {
//!     println!("{} -> /invite/{}", friend.name, friend.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The client compiles for both native targets and `wasm32-unknown-unknown`
//! (where `reqwest` goes through the browser's `fetch`).

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{CeremonyDetails, Friend, GraduationInfo};
