use std::sync::Arc;

use mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};

use crate::events::CommentSavedEvent;
use crate::models::Comment;
use crate::records::{self, RecordStore};

/// Save action of the comment form; same id contract as
/// [`super::SavePostCommand`]. `post_id` is passed through unvalidated.
#[derive(Debug, Clone)]
pub struct SaveCommentCommand {
    pub id: String,
    pub text: String,
    pub post_id: String,
}

impl Request<Option<Comment>> for SaveCommentCommand {}

pub struct SaveCommentRequestHandler<S>(pub Arc<S>, pub DefaultAsyncMediator);

#[mediator::async_trait]
impl<S> AsyncRequestHandler<SaveCommentCommand, Option<Comment>> for SaveCommentRequestHandler<S>
where
    S: RecordStore<Comment> + 'static,
{
    async fn handle(&mut self, command: SaveCommentCommand) -> Option<Comment> {
        let SaveCommentCommand { id, text, post_id } = command;
        let saved = records::save(self.0.as_ref(), &id, |id| Comment {
            id: id.to_owned(),
            text,
            post_id,
        })
        .await;

        if let Some(comment) = &saved {
            self.1.publish(CommentSavedEvent(comment.clone())).await.ok();
        }
        saved
    }
}
