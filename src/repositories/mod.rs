//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for the core's relations. Each repository receives a shared
//! connection pool at construction, so tests can swap in in-memory
//! fixtures.

pub mod account;
pub mod notified_branch;
pub mod oauth_token;
pub mod subscription;

pub use account::AccountRepository;
pub use notified_branch::NotifiedBranchRepository;
pub use oauth_token::OAuthTokenRepository;
pub use subscription::SubscriptionRepository;
