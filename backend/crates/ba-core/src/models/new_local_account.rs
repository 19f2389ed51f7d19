use crate::{AccountRole, Credential};

/// Fields handed to the account directory when creating an account.
#[derive(Debug)]
pub struct NewLocalAccount {
    pub login: String,
    pub email: String,
    pub display_name: String,
    pub credential: Credential,
    pub role: AccountRole,
}
