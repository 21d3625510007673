use serde::{Deserialize, Serialize};

use crate::records::{DeletionPolicy, Record};

/// A blog post managed through the REST mock backend.
///
/// Posts are never physically removed: deleting one re-submits it with
/// `isDeleted: true` and the row stays in the table, struck through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Record for Post {
    const COLLECTION: &'static str = "posts";
    const DELETION: DeletionPolicy = DeletionPolicy::Soft;

    fn id(&self) -> &str {
        &self.id
    }

    fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }
}
