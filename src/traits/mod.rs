pub mod chat_provider;
