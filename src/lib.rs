//! # Entries Core
//!
//! Field hydration engine for legacy CMS content: loads entry batches from
//! their split storage tables and decodes raw field slots into typed values
//! through per-fieldtype hydrator strategies.
//!
//! ## Overview
//!
//! The legacy schema stores every field value as an opaque scalar in a wide
//! `channel_data` row (`field_id_N` columns), with repeatable matrix/grid
//! fields exiled to their own row tables. This crate reassembles that data
//! into usable entries in two phases:
//!
//! 1. **Preload** — one bulk fetch per fieldtype for the whole batch,
//!    eliminating per-entry queries (N+1 avoidance is the design center)
//! 2. **Hydrate** — per-entry, per-fieldtype decoding of raw slots into
//!    typed [`FieldValue`]s, including cells inside matrix/grid rows
//!
//! ## Architecture
//!
//! - **Models** ([`models`]): `Entry`, `Field`, `Channel`, `Col`, `Row` and
//!   the [`FieldValue`] tagged union
//! - **Collections** ([`collection`]): field catalogs with name lookup,
//!   column indices, and the per-run [`EntryCollection`]
//! - **Hydrators** ([`hydrators`]): one strategy per fieldtype family,
//!   selected through a static registration table in [`HydratorFactory`];
//!   unregistered fieldtypes fall through to a pass-through default
//! - **Storage** ([`storage`]): the [`RowFetcher`] collaborator trait with
//!   in-memory and Postgres implementations
//! - **Loader** ([`loader`]): the [`EntryLoader`] driver that fetches,
//!   assembles, preloads, and hydrates
//!
//! ## Quick Start
//!
//! ```no_run
//! use entries_core::{
//!     Channel, EntriesConfig, EntryLoader, Field, HydratorFactory,
//!     InMemorySiteRepository, InMemoryUploadLocationRepository,
//! };
//! use entries_core::repositories::{ChannelRepository, FieldRepository};
//! use entries_core::storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! # async fn example() -> entries_core::Result<()> {
//! let fields = FieldRepository::new(vec![
//!     Field::new(1, "event_date", "date", 100),
//! ]);
//! let channels = Arc::new(ChannelRepository::new(
//!     vec![Channel::new(1, "events", 100)],
//!     &fields,
//! ));
//! let factory = HydratorFactory::new(
//!     Arc::new(InMemorySiteRepository::default()),
//!     Arc::new(InMemoryUploadLocationRepository::default()),
//! );
//!
//! let loader = EntryLoader::new(
//!     Arc::new(MemoryStorage::new()),
//!     channels,
//!     factory,
//!     EntriesConfig::default(),
//! );
//!
//! let entries = loader.load(&[10, 11]).await?;
//! for entry in entries.iter() {
//!     println!("{}", entry.to_output());
//! }
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod config;
pub mod constants;
pub mod error;
pub mod hydrators;
pub mod loader;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod rows;
pub mod storage;

pub use collection::{ColCollection, EntryCollection, FieldCollection};
pub use config::EntriesConfig;
pub use error::{HydrationError, Result};
pub use hydrators::{Hydrator, HydratorFactory};
pub use loader::EntryLoader;
pub use logging::init_structured_logging;
pub use models::{Channel, Col, Entry, Field, FieldValue, Row};
pub use repositories::{
    ChannelRepository, FieldRepository, InMemorySiteRepository,
    InMemoryUploadLocationRepository, SiteRepository, UploadLocation, UploadLocationRepository,
};
pub use rows::RowSet;
pub use storage::{RawRow, RowFetcher, RowFilter};

#[cfg(feature = "postgres")]
pub use storage::PostgresStorage;
