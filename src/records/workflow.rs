//! The optimistic CRUD workflow shared by posts and comments.
//!
//! Every failure on this path is swallowed: the operation just does not
//! proceed and a log line is the only trace. Only the catalog loader
//! surfaces errors to the user.

use crate::records::{DeletionPolicy, Record, RecordStore};

/// Numeric value of a record id, the way the original computed it: leading
/// decimal digits count, anything else is 0.
pub fn numeric_id(id: &str) -> i64 {
    let digits: String = id
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Id for a freshly created record: max numeric id in the collection plus
/// one, or `1` when the collection is empty or holds no numeric ids.
///
/// Nothing guards two clients computing the same id at once; duplicate ids
/// under concurrent creates are an accepted limitation of the backend
/// contract.
pub fn next_id<V: Record>(existing: &[V]) -> String {
    let max = existing
        .iter()
        .map(|record| numeric_id(record.id()))
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Loads the whole collection, or `None` when the request fails.
pub async fn load_all<V, S>(store: &S) -> Option<Vec<V>>
where
    V: Record,
    S: RecordStore<V> + ?Sized,
{
    match store.get_all().await {
        Ok(records) => Some(records),
        Err(err) => {
            log::warn!("loading {} failed: {}", V::COLLECTION, err);
            None
        }
    }
}

/// Saves a record built from form input.
///
/// With a non-empty `raw_id` the record must already exist: a lookup runs
/// first and the full-replace PUT is skipped silently when it misses. With
/// an empty id the whole collection is fetched to compute the next id and
/// the record is POSTed with that id in the body.
///
/// Returns the record as submitted on success, `None` otherwise.
pub async fn save<V, S, F>(store: &S, raw_id: &str, make: F) -> Option<V>
where
    V: Record,
    S: RecordStore<V> + ?Sized,
    F: FnOnce(&str) -> V + Send,
{
    let id = raw_id.trim();
    if !id.is_empty() {
        match store.get(id).await {
            Ok(Some(_)) => {
                let record = make(id);
                match store.replace(id, &record).await {
                    Ok(()) => Some(record),
                    Err(err) => {
                        log::warn!("updating {}/{} failed: {}", V::COLLECTION, id, err);
                        None
                    }
                }
            }
            Ok(None) => {
                log::warn!("{}/{} does not exist, skipping update", V::COLLECTION, id);
                None
            }
            Err(err) => {
                log::warn!("lookup of {}/{} failed: {}", V::COLLECTION, id, err);
                None
            }
        }
    } else {
        let existing = match store.get_all().await {
            Ok(records) => records,
            Err(err) => {
                log::warn!("loading {} for id assignment failed: {}", V::COLLECTION, err);
                return None;
            }
        };
        let id = next_id(&existing);
        let record = make(&id);
        match store.create(&record).await {
            Ok(()) => Some(record),
            Err(err) => {
                log::warn!("creating {}/{} failed: {}", V::COLLECTION, id, err);
                None
            }
        }
    }
}

/// Deletes a record according to its entity's [`DeletionPolicy`].
///
/// Soft deletion re-submits the record unchanged except for its deleted
/// marker; hard deletion removes it for real. Returns whether a mutation
/// was acknowledged by the backend.
pub async fn delete<V, S>(store: &S, id: &str) -> bool
where
    V: Record,
    S: RecordStore<V> + ?Sized,
{
    match V::DELETION {
        DeletionPolicy::Soft => match store.get(id).await {
            Ok(Some(record)) => {
                let flagged = record.deleted();
                match store.replace(id, &flagged).await {
                    Ok(()) => true,
                    Err(err) => {
                        log::warn!("flagging {}/{} failed: {}", V::COLLECTION, id, err);
                        false
                    }
                }
            }
            Ok(None) => {
                log::warn!("{}/{} does not exist, nothing to delete", V::COLLECTION, id);
                false
            }
            Err(err) => {
                log::warn!("lookup of {}/{} failed: {}", V::COLLECTION, id, err);
                false
            }
        },
        DeletionPolicy::Hard => match store.remove(id).await {
            Ok(()) => true,
            Err(err) => {
                log::warn!("deleting {}/{} failed: {}", V::COLLECTION, id, err);
                false
            }
        },
    }
}
