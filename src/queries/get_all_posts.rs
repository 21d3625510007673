use std::sync::Arc;

use mediator::{AsyncRequestHandler, Request};

use crate::models::Post;
use crate::records::{self, RecordStore};

/// Reloads the whole posts collection. `None` means the request failed and
/// the caller should keep whatever it is currently showing.
pub struct GetAllPostsRequest;

impl Request<Option<Vec<Post>>> for GetAllPostsRequest {}

pub struct GetAllPostsRequestHandler<S>(pub Arc<S>);

#[mediator::async_trait]
impl<S> AsyncRequestHandler<GetAllPostsRequest, Option<Vec<Post>>> for GetAllPostsRequestHandler<S>
where
    S: RecordStore<Post> + 'static,
{
    async fn handle(&mut self, _: GetAllPostsRequest) -> Option<Vec<Post>> {
        records::load_all(self.0.as_ref()).await
    }
}
