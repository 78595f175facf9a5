pub mod client;
pub mod discovery;
pub mod normalize;

pub use crate::domain::document::PageDocument;
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
