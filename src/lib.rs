//! # storefront-client
//!
//! Headless client for a small storefront demo. Two independent surfaces
//! share one mediator:
//!
//! - **Catalog**: fetches a static product list (primary URL with a
//!   one-shot fallback), caches it for the session and filters/sorts it
//!   in memory. Load failures are user-visible and retryable.
//! - **Post/comment admin**: optimistic CRUD against a json-server style
//!   REST backend. Posts soft-delete (flagged, struck through in the
//!   table); comments hard-delete behind a confirmation prompt. CRUD
//!   failures are logged and otherwise swallowed.
//!
//! User actions are typed requests sent through an async mediator;
//! mutation handlers publish events consumed by logging subscribers. All
//! rendering is expressed as plain view-model values, so the whole flow
//! runs headless.
//!
//! ```no_run
//! use storefront_client::app::{connect, ClientConfig};
//!
//! # async fn demo() {
//! let (catalog, mut records) = connect(ClientConfig::default());
//!
//! catalog.reload().await;
//! for card in catalog.cards() {
//!     println!("{} — {}", card.title, card.price_label);
//! }
//!
//! records.refresh().await;
//! records.save_post("", "hello world", 0).await;
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod events;
pub mod models;
pub mod queries;
pub mod records;
pub mod viewmodel;

pub use error::{Error, Result};
