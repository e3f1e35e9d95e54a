//! Chat relay endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, ListMessagesRequest, ListMessagesResponse, NewThreadResponse,
    SendMessageRequest, SendMessageResponse,
};
pub use handlers::{ChatApiError, ChatAppState, ChatOperation};
pub use routes::chat_router;
