mod role;
mod store;

pub use role::{Category, Role};
pub use store::{RoleIndex, RoleStore, RoleStoreError};
