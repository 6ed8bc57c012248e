//! Callback service for a chat platform bot: verifies webhook signatures,
//! runs each text message through the small-talk API, and replies on the
//! originating chat.

pub mod config;
pub mod line;
pub mod routes;
pub mod signature;
pub mod talk;
pub mod webhook;
