#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Few-shot shelf organization classifier
//!
//! Encodes three labeled exemplar photos and one query photo as inline data
//! URLs, assembles a five-turn chat prompt around them and asks a hosted
//! vision model (an Azure OpenAI deployment by default) to rate how
//! organized the query shelf is. The model's answer is returned verbatim.
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_classifier::{Classifier, ExemplarSet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = Classifier::from_env(ExemplarSet::default())?;
//!     let answer = classifier.classify("photos/aisle-7.jpg").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod encode;
pub mod error;
pub mod exemplar;
pub mod label;
pub mod prompt;
pub mod template;

pub use classifier::{
    Classifier, ClassifierConfig, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, InferenceClient,
};
pub use encode::{EncodedImage, encode_image};
pub use error::{ClassifyError, EncodeError};
pub use exemplar::ExemplarSet;
pub use label::ClassificationLabel;
pub use prompt::build_messages;
pub use template::{PROMPT_VERSION, PromptLanguage, PromptTemplate};

// Wire types used by the assembled prompt
pub use azure_openai_ox::{ChatRequest, Content, ContentPart, Message, Role};
