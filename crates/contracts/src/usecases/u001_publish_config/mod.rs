//! Publishing the catalog document back to the remote document store
//! (a GitHub Gist addressed by its raw file URL).

pub mod address;
pub mod request;
pub mod response;

pub use address::{AddressError, GistAddress};
pub use request::{FileContent, PublishRequest, SyncCredentials};
pub use response::StoreErrorBody;
