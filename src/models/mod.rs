//! # Data Models
//!
//! SeaORM entity models for the four relations the core persists, plus the
//! token payload type handed over by the OAuth flow collaborator.

use serde::{Deserialize, Serialize};

pub mod account;
pub mod notified_branch;
pub mod oauth_token;
pub mod subscription;

pub use account::Entity as Account;
pub use notified_branch::Entity as NotifiedBranch;
pub use oauth_token::Entity as OAuthToken;
pub use subscription::Entity as Subscription;

/// Token payload produced by the OAuth flow once a user completes
/// authorization. The core stores it verbatim and never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
