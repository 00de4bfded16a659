#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Azure OpenAI chat completions client for Rust
//!
//! This crate provides a small client for Azure-hosted OpenAI deployments, with support for:
//! - Chat completions with multimodal (text + inline image) messages
//! - Deployment-scoped endpoints with `api-version` pinning
//! - `api-key` header authentication
//! - Typed API errors (authentication, quota, invalid request)
//!
//! # Example
//!
//! ```rust,no_run
//! use azure_openai_ox::{AzureConfig, AzureOpenAI, ChatRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AzureConfig::from_env()?;
//!     let client = AzureOpenAI::new(config)?;
//!
//!     let request = ChatRequest::builder()
//!         .model(client.deployment())
//!         .message(Message::user("Hello, world!"))
//!         .max_tokens(64)
//!         .build();
//!
//!     let response = client.send(&request).await?;
//!     println!("{}", response.content().unwrap_or("No content"));
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
mod internal;
pub mod message;
pub mod request;
pub mod response;
pub mod usage;

// Re-export main types
pub use client::AzureOpenAI;
pub use config::{AzureConfig, DEFAULT_API_VERSION};
pub use error::AzureOpenAIError;
pub use message::{Content, ContentPart, ImageUrl, Message, Role};
pub use request::ChatRequest;
pub use response::{ChatResponse, Choice};
pub use usage::Usage;
