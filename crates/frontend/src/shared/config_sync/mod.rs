//! Acquisition, caching and editing of the catalog Configuration.
//!
//! - `loader.rs`: cache → bundled default → remote document, with fallback
//! - `fetcher.rs`: HTTP implementation of the loader's fetch seam
//! - `mutator.rs`: every edit is mirrored into the durable cache
//! - `context.rs`: the reactive slot the views read and edit through
//! - `export.rs` / `import.rs`: `config.json` download and upload

pub mod context;
pub mod export;
pub mod fetcher;
pub mod generation;
pub mod import;
pub mod loader;
pub mod mutator;

pub use context::{provide_config, use_config, ConfigContext};
pub use generation::{Generation, GenerationGuard};
pub use loader::{ConfigFetcher, ConfigLoader, ConfigSource, LoadState};
