pub mod context;
pub mod guard;

pub use context::{provide_admin_session, use_admin_session, AdminSession};
pub use guard::RequireAdmin;
