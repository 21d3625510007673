use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::error::{Error, Result};
use crate::records::Record;

/// Storage seam for a single collection resource.
///
/// The production implementation is [`RestCollection`]; tests substitute an
/// in-memory one so the CRUD workflow stays exercisable without a backend.
#[async_trait]
pub trait RecordStore<V: Record>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<V>>;

    /// Fetches one record. `Ok(None)` means the backend answered 404;
    /// any other non-success status is an error.
    async fn get(&self, id: &str) -> Result<Option<V>>;

    async fn create(&self, value: &V) -> Result<()>;

    /// Full-replace update of the record at `id`.
    async fn replace(&self, id: &str, value: &V) -> Result<()>;

    async fn remove(&self, id: &str) -> Result<()>;
}

/// A REST collection (`GET /posts`, `PUT /posts/{id}`, ...) spoken with
/// plain JSON bodies. Success is determined by HTTP status alone; response
/// bodies of mutations are ignored.
#[derive(Debug, Clone)]
pub struct RestCollection<V> {
    client: Client,
    base_url: String,
    _marker: PhantomData<V>,
}

impl<V> RestCollection<V> {
    /// `base_url` is the collection URL itself, e.g.
    /// `http://localhost:3000/posts`.
    pub fn new<S: Into<String>>(client: Client, base_url: S) -> Self {
        RestCollection {
            client,
            base_url: base_url.into(),
            _marker: PhantomData,
        }
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn ensure_success(url: &str, response: &Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::status(url, response.status()))
        }
    }
}

#[async_trait]
impl<V: Record> RecordStore<V> for RestCollection<V> {
    async fn get_all(&self) -> Result<Vec<V>> {
        let response = self.client.get(&self.base_url).send().await?;
        Self::ensure_success(&self.base_url, &response)?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Option<V>> {
        let url = self.item_url(id);
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::ensure_success(&url, &response)?;
        Ok(Some(response.json().await?))
    }

    async fn create(&self, value: &V) -> Result<()> {
        let response = self
            .client
            .post(&self.base_url)
            .json(value)
            .send()
            .await?;
        Self::ensure_success(&self.base_url, &response)
    }

    async fn replace(&self, id: &str, value: &V) -> Result<()> {
        let url = self.item_url(id);
        let response = self.client.put(&url).json(value).send().await?;
        Self::ensure_success(&url, &response)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let url = self.item_url(id);
        let response = self.client.delete(&url).send().await?;
        Self::ensure_success(&url, &response)
    }
}
