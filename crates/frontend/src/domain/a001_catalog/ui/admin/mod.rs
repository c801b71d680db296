//! Admin editor.
//!
//! - view_model.rs: login, import/export, publish and sync-settings commands
//! - view.rs: the modal with its tabs
//! - login.rs, site_editor.rs, category_editor.rs, ad_editor.rs,
//!   sync_settings.rs: tab contents
//! - fields.rs: labelled text, text area and image inputs

mod ad_editor;
mod category_editor;
mod fields;
mod login;
mod site_editor;
mod sync_settings;
mod view;
mod view_model;

pub use view::AdminModal;
pub use view_model::{AdminTab, AdminViewModel};
