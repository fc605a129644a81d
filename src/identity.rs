//! Derivation of the credential identifier from an account's natural key.

/// Computes the opaque identifier linking an account to its stored OAuth
/// credential.
///
/// The mapping must stay identical everywhere an identifier is produced so
/// the account and token stores remain consistent without a cross-table
/// join. Chat-service usernames cannot contain `:`, which keeps the
/// encoding unambiguous.
pub fn account_identifier(username: &str, nickname: &str) -> String {
    format!("{username}:{nickname}")
}
