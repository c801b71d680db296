//! Catalog configuration document: site metadata, admin credentials,
//! categories with their programs, and promotional ads.

pub mod aggregate;
pub mod fields;
pub mod validation;

pub use aggregate::{Ad, AdminCredentials, BootstrapDocument, Category, Configuration, Program};
pub use fields::{AdField, ProgramField, SiteField};
pub use validation::DocumentError;
