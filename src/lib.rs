//! # branchwire
//!
//! Storage core for a chat bot that relays repository push events to
//! subscribed conversations. The crate owns the subscription and delivery
//! ledgers plus the per-account OAuth credential store; the chat transport,
//! the webhook listener and the OAuth consent flow are external
//! collaborators.

pub mod config;
pub mod db;
pub mod error;
pub mod identity;
pub mod logging;
pub mod models;
pub mod repositories;

pub use migration;
