pub mod agent;
pub mod conversation;

pub use agent::{ChatMode, EcoAgent, Reply};
pub use conversation::{ConversationLog, Message, Origin};
