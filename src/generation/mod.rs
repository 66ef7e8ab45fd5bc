//! Outline generation against an external text-generation service.
//!
//! - **Backend**: the `TextGenerator` seam, message/call types, backend errors
//! - **OpenAI**: blocking HTTP implementation of the seam
//! - **Requester**: one call per request, uniform `GenerationError` on failure

mod backend;
pub mod openai;
mod requester;


pub use backend::{BackendError, Completion, CompletionCall, Message, Role, TextGenerator};
pub use openai::{ClientSettings, OpenAiClient};
pub use requester::{EmptyCompletion, OutlineRequester, SYSTEM_INSTRUCTION};
