pub mod chat_error;
pub mod commands;
pub mod role;
