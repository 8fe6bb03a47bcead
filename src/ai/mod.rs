pub mod gateway;
pub mod local;

pub use gateway::{ChatGateway, ChatResponse, GatewayError, RouteSuggestion, UserProfile};
pub use local::{KeywordResponder, LocalResponder};
