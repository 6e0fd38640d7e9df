//! Feedback generation and personality answering for MindVault.
//!
//! Two flows live here, both thin compositions over the memory and provider
//! crates:
//!
//! - [`FeedbackGenerator`]: one journal entry in, structured CBT/Stoic
//!   feedback out.
//! - [`PersonalityResponder`]: a free-form question in, an answer grounded
//!   in the owner's past entries and the shared knowledge corpus out.

pub mod error;
pub mod feedback;
pub mod prompts;
pub mod responder;

pub use error::{AgentError, Result};
pub use feedback::{FeedbackGenerator, FeedbackResult, DEFAULT_FEEDBACK_MESSAGE};
pub use responder::{
    PersonalityResponder, CONTEXT_LIMIT, EMPTY_ANSWER_MESSAGE, KNOWLEDGE_K,
    NOT_ENOUGH_DATA_MESSAGE,
};
