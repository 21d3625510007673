use std::sync::Arc;

use mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};

use crate::events::PostSavedEvent;
use crate::models::Post;
use crate::records::{self, RecordStore};

/// Save action of the post form. `id` is the raw form value: empty means
/// create with an auto-assigned id, non-empty means update that record if
/// it exists.
#[derive(Debug, Clone)]
pub struct SavePostCommand {
    pub id: String,
    pub title: String,
    pub views: i64,
}

impl Request<Option<Post>> for SavePostCommand {}

pub struct SavePostRequestHandler<S>(pub Arc<S>, pub DefaultAsyncMediator);

#[mediator::async_trait]
impl<S> AsyncRequestHandler<SavePostCommand, Option<Post>> for SavePostRequestHandler<S>
where
    S: RecordStore<Post> + 'static,
{
    async fn handle(&mut self, command: SavePostCommand) -> Option<Post> {
        let SavePostCommand { id, title, views } = command;
        let saved = records::save(self.0.as_ref(), &id, |id| Post {
            id: id.to_owned(),
            title,
            views,
            // The form has no deleted control, so saving a post always
            // clears the flag; editing a soft-deleted id revives it.
            is_deleted: false,
        })
        .await;

        if let Some(post) = &saved {
            self.1.publish(PostSavedEvent(post.clone())).await.ok();
        }
        saved
    }
}
