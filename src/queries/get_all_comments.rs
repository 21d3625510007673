use std::sync::Arc;

use mediator::{AsyncRequestHandler, Request};

use crate::models::Comment;
use crate::records::{self, RecordStore};

/// Reloads the whole comments collection; `None` on failure.
pub struct GetAllCommentsRequest;

impl Request<Option<Vec<Comment>>> for GetAllCommentsRequest {}

pub struct GetAllCommentsRequestHandler<S>(pub Arc<S>);

#[mediator::async_trait]
impl<S> AsyncRequestHandler<GetAllCommentsRequest, Option<Vec<Comment>>>
    for GetAllCommentsRequestHandler<S>
where
    S: RecordStore<Comment> + 'static,
{
    async fn handle(&mut self, _: GetAllCommentsRequest) -> Option<Vec<Comment>> {
        records::load_all(self.0.as_ref()).await
    }
}
