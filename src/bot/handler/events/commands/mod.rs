mod reload;
mod role;

pub use reload::reload_roles;
pub use role::role;
