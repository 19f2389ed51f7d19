pub mod account_role;
pub mod credential;
pub mod external_identity;
pub mod local_account;
pub mod new_local_account;
pub mod sync_candidate;
pub mod sync_outcome;
