//! Seeds and size bounds shared by the account constraints and handlers.

pub const DAO_SEED: &[u8] = b"dao";
pub const VAULT_SEED: &[u8] = b"vault";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const VOTE_SEED: &[u8] = b"vote";
pub const REVIEWER_SEED: &[u8] = b"reviewer";

/// Upper bound on the admin set stored inline in `DaoConfig`.
pub const MAX_ADMINS: usize = 10;

/// Maximum slug length in bytes.
pub const MAX_SLUG_LEN: usize = 64;

/// Maximum stream id (external content reference) length in bytes.
pub const MAX_STREAM_ID_LEN: usize = 64;

/// GitHub caps user names at 39 characters.
pub const MAX_GITHUB_NAME_LEN: usize = 39;
