#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{insert_identity, insert_provider_account, new_account};
pub use test_db::create_test_pool;
