use serde::{Deserialize, Serialize};

use crate::records::{DeletionPolicy, Record};

/// A comment on a post. `post_id` is a foreign key to [`super::Post`] but
/// is not validated anywhere, neither here nor by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub post_id: String,
}

impl Record for Comment {
    const COLLECTION: &'static str = "comments";
    const DELETION: DeletionPolicy = DeletionPolicy::Hard;

    fn id(&self) -> &str {
        &self.id
    }
}
