use std::sync::Arc;

use mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};

use crate::events::CommentDeletedEvent;
use crate::models::Comment;
use crate::records::{self, RecordStore};

/// Physically deletes a comment. Unlike posts there is no soft-delete
/// path; the confirmation prompt happens upstream in the shell.
#[derive(Debug, Clone)]
pub struct DeleteCommentCommand(pub String);

impl Request<bool> for DeleteCommentCommand {}

pub struct DeleteCommentRequestHandler<S>(pub Arc<S>, pub DefaultAsyncMediator);

#[mediator::async_trait]
impl<S> AsyncRequestHandler<DeleteCommentCommand, bool> for DeleteCommentRequestHandler<S>
where
    S: RecordStore<Comment> + 'static,
{
    async fn handle(&mut self, command: DeleteCommentCommand) -> bool {
        let deleted = records::delete::<Comment, _>(self.0.as_ref(), &command.0).await;
        if deleted {
            self.1.publish(CommentDeletedEvent(command.0)).await.ok();
        }
        deleted
    }
}
