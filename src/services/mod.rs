pub mod account_service;
pub mod message_service;
