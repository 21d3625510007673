use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::models::Product;

/// Where the product collection comes from. The catalog either loads whole
/// or not at all; there is no partial-result handling behind this seam.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// A single static JSON document over HTTP, expected to hold an array of
/// products.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    url: String,
}

impl HttpProductSource {
    pub fn new<S: Into<String>>(client: Client, url: S) -> Self {
        HttpProductSource {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(Error::status(&self.url, response.status()));
        }
        Ok(response.json().await?)
    }
}

/// Primary source with a one-shot fallback: any failure of the primary,
/// transport or status, triggers a single attempt against the fallback.
/// The fallback's failure is the one the caller sees.
pub struct FallbackSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackSource<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        FallbackSource { primary, fallback }
    }
}

#[async_trait]
impl<P, F> ProductSource for FallbackSource<P, F>
where
    P: ProductSource,
    F: ProductSource,
{
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        match self.primary.fetch_products().await {
            Ok(products) => Ok(products),
            Err(err) => {
                log::warn!("primary catalog source failed ({}), trying fallback", err);
                self.fallback.fetch_products().await
            }
        }
    }
}
