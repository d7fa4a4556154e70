pub mod list_messages_route;
pub mod reset_chat_route;
pub mod send_chat_request;
pub mod send_chat_response;
pub mod send_chat_route;
