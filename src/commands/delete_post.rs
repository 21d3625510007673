use std::sync::Arc;

use mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};

use crate::events::PostDeletedEvent;
use crate::models::Post;
use crate::records::{self, RecordStore};

/// Soft-deletes the post with the given id: the record is re-submitted
/// unchanged except for `isDeleted: true`.
#[derive(Debug, Clone)]
pub struct DeletePostCommand(pub String);

impl Request<bool> for DeletePostCommand {}

pub struct DeletePostRequestHandler<S>(pub Arc<S>, pub DefaultAsyncMediator);

#[mediator::async_trait]
impl<S> AsyncRequestHandler<DeletePostCommand, bool> for DeletePostRequestHandler<S>
where
    S: RecordStore<Post> + 'static,
{
    async fn handle(&mut self, command: DeletePostCommand) -> bool {
        let deleted = records::delete::<Post, _>(self.0.as_ref(), &command.0).await;
        if deleted {
            self.1.publish(PostDeletedEvent(command.0)).await.ok();
        }
        deleted
    }
}
