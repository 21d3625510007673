//! Records managed against the REST mock backend: the store seam, the
//! CRUD workflow and the per-entity deletion policy.

mod store;
mod workflow;

pub use store::{RecordStore, RestCollection};
pub use workflow::{delete, load_all, next_id, numeric_id, save};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// How an entity type leaves the dataset.
///
/// The original scripts made this choice implicitly inside each handler;
/// here it is resolved once per entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionPolicy {
    /// Keep the record and re-submit it with its deleted marker set.
    Soft,
    /// Issue a real DELETE against the collection.
    Hard,
}

/// A record living in a REST collection resource.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection segment under the API base, e.g. `posts`.
    const COLLECTION: &'static str;

    /// How deletion behaves for this entity type.
    const DELETION: DeletionPolicy;

    fn id(&self) -> &str;

    /// Returns the record with its soft-delete marker set. Only consulted
    /// when [`Record::DELETION`] is [`DeletionPolicy::Soft`]; the default
    /// is the identity.
    fn deleted(self) -> Self {
        self
    }
}
