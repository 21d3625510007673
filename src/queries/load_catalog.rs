use std::sync::Arc;

use mediator::{AsyncRequestHandler, Request};

use crate::catalog::ProductSource;
use crate::models::Product;

/// Loads the product collection through the configured source chain.
/// Unlike the record requests this one propagates its error: catalog
/// failures are user-visible and retryable.
pub struct LoadCatalogRequest;

impl Request<crate::Result<Vec<Product>>> for LoadCatalogRequest {}

pub struct LoadCatalogRequestHandler<S>(pub Arc<S>);

#[mediator::async_trait]
impl<S> AsyncRequestHandler<LoadCatalogRequest, crate::Result<Vec<Product>>>
    for LoadCatalogRequestHandler<S>
where
    S: ProductSource + 'static,
{
    async fn handle(&mut self, _: LoadCatalogRequest) -> crate::Result<Vec<Product>> {
        self.0.fetch_products().await
    }
}
