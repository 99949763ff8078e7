//! Release endpoint client for Herald
//!
//! This crate owns the wire side of a release announcement: the JSON request
//! body, the response shape, and the single authenticated POST that submits
//! one to the release endpoint.
//!
//! ## Usage
//!
//! ```ignore
//! use herald_api::{Credentials, PublishClient, PublishRequestBuilder, ReleasePublisher};
//!
//! let request = PublishRequestBuilder::new(asset_url, "1.2.0", "plugin.zip")
//!     .changelog(changelog_html)
//!     .requirements(requirements)
//!     .build();
//!
//! let client = PublishClient::new("https://example.com/wp-json/releases/v1/release")?;
//! let response = client.publish(&request, &Credentials::new("user", "pass")).await?;
//! ```

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::PublishClient;
pub use error::{ApiError, Result};
pub use traits::ReleasePublisher;
pub use types::*;
