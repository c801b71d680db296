//! Publishing the catalog document to the remote document store.

pub mod api;
pub mod publisher;
pub mod storage;

pub use api::GistClient;
pub use publisher::{DocumentStoreClient, PublishError, Publisher};
