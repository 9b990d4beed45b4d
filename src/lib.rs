//! # TgService API Client
//!
//! An async Rust client for the TgService messaging gateway REST API:
//! manage bots, message templates, web hooks and channels, and send Telegram
//! messages through them.
//!
#![deny(unsafe_code)]
//! ## Features
//!
//! - **One dispatch chokepoint**: every operation funnels through
//!   [`client::TgServiceClient::request`], which owns URL construction,
//!   authentication, and response/error translation.
//! - **Table-driven resources**: the get/edit/create families are driven by
//!   the [`api::Resource`] catalogue instead of copy-pasted per resource.
//! - **Local validation first**: required-field and either/or checks run
//!   before any network exchange and fail with a descriptive
//!   [`error::ApiError::InvalidInput`].
//! - **Typed failures**: a failed exchange carries status, verb, URL, parsed
//!   error body, and raw headers in one [`error::ApiFailure`] record.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tgservice::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = TgServiceClient::builder()
//!         .login("your-login")
//!         .password("your-password")
//!         .build()?;
//!
//!     // List registered bots
//!     if let Some(bots) = client.get_bots(None).await? {
//!         println!("bots: {bots}");
//!     }
//!
//!     // Send a message through bot 5
//!     client
//!         .send_message(SendMessage::new().bot_id(5).text("deploy finished"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use tgservice::prelude::*;
//!
//! # async fn run(client: TgServiceClient) {
//! match client.get_bots(Some(7)).await {
//!     Ok(Some(bot)) => println!("bot: {bot}"),
//!     Ok(None) => println!("no content"),
//!     Err(e) if e.status_code() == Some(404) => println!("no such bot"),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! # }
//! ```

pub mod api;
pub mod client;
pub mod defaults;
pub mod error;
pub mod traits;
pub mod types;

pub use api::{Resource, SendMessage};
pub use client::{TgServiceClient, TgServiceClientBuilder};
pub use error::{ApiError, ApiFailure, Result};
pub use traits::TgServiceApi;
pub use types::{HttpConfig, Params};

/// Convenient imports for typical usage
pub mod prelude {
    pub use crate::api::{Resource, SendMessage};
    pub use crate::client::{TgServiceClient, TgServiceClientBuilder};
    pub use crate::error::{ApiError, ApiFailure, Result};
    pub use crate::traits::TgServiceApi;
    pub use crate::types::{HttpConfig, Params};
}
