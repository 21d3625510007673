use std::sync::Arc;

use mediator::{AsyncRequestHandler, Request};

use crate::models::Comment;
use crate::records::{Record, RecordStore};
use crate::viewmodel::CommentForm;

/// Fetches one comment to populate the edit form. Nothing locks the
/// record; a concurrent edit simply wins by last PUT.
pub struct EditCommentRequest(pub String);

impl Request<Option<CommentForm>> for EditCommentRequest {}

pub struct EditCommentRequestHandler<S>(pub Arc<S>);

#[mediator::async_trait]
impl<S> AsyncRequestHandler<EditCommentRequest, Option<CommentForm>>
    for EditCommentRequestHandler<S>
where
    S: RecordStore<Comment> + 'static,
{
    async fn handle(&mut self, request: EditCommentRequest) -> Option<CommentForm> {
        match self.0.get(&request.0).await {
            Ok(Some(comment)) => Some(CommentForm::from(&comment)),
            Ok(None) => None,
            Err(err) => {
                log::warn!(
                    "lookup of {}/{} failed: {}",
                    Comment::COLLECTION,
                    request.0,
                    err
                );
                None
            }
        }
    }
}
