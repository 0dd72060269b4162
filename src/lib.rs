//! HTTP service that turns quiet-time, book, Bible-study and question requests
//! into prompts for a chat-completion provider.

pub mod config;
pub mod model;
pub mod web;
