//! # Repositories
//!
//! Preloaded lookup repositories consumed by the hydration pipeline:
//! channels (with their field catalogs), upload locations for file-URL
//! resolution, and site pages for `{page_N}` token resolution.
//!
//! The site and upload-location repositories are trait seams so host
//! applications can back them with whatever store holds that data;
//! in-memory implementations are provided for tests and simple embeddings.

pub mod channels;
pub mod sites;
pub mod uploads;

pub use channels::{ChannelRepository, FieldRepository};
pub use sites::{InMemorySiteRepository, SiteRepository};
pub use uploads::{InMemoryUploadLocationRepository, UploadLocation, UploadLocationRepository};
