pub mod config_helper;
pub mod conversation_helper;
