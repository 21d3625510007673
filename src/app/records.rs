use mediator::AsyncMediator;

use crate::app::SharedMediator;
use crate::commands::{
    DeleteCommentCommand, DeletePostCommand, SaveCommentCommand, SavePostCommand,
};
use crate::models::Comment;
use crate::queries::{EditCommentRequest, GetAllCommentsRequest, GetAllPostsRequest};
use crate::records::{DeletionPolicy, Record};
use crate::viewmodel::{CommentForm, CommentRow, PostRow};

type ConfirmHook = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Shell for the post/comment admin page: two tables and one edit form.
///
/// Every mutation that the backend acknowledges triggers a full reload of
/// the affected table; there is no incremental patching. Failed mutations
/// and failed reloads leave the tables exactly as they were.
pub struct RecordsApp {
    mediator: SharedMediator,
    posts: Vec<PostRow>,
    comments: Vec<CommentRow>,
    comment_form: CommentForm,
    confirm_delete: Option<ConfirmHook>,
}

impl RecordsApp {
    pub fn new(mediator: SharedMediator) -> Self {
        RecordsApp {
            mediator,
            posts: Vec::new(),
            comments: Vec::new(),
            comment_form: CommentForm::default(),
            confirm_delete: None,
        }
    }

    /// Installs the prompt consulted before irreversible deletes. Without
    /// one they proceed unprompted.
    pub fn with_confirmation<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.confirm_delete = Some(Box::new(hook));
        self
    }

    /// Page-load refresh of both tables.
    pub async fn refresh(&mut self) {
        self.refresh_posts().await;
        self.refresh_comments().await;
    }

    pub async fn refresh_posts(&mut self) {
        let reloaded = self.mediator.lock().await.send(GetAllPostsRequest).await;
        if let Ok(Some(posts)) = reloaded {
            self.posts = posts.iter().map(PostRow::from).collect();
        }
    }

    pub async fn refresh_comments(&mut self) {
        let reloaded = self.mediator.lock().await.send(GetAllCommentsRequest).await;
        if let Ok(Some(comments)) = reloaded {
            self.comments = comments.iter().map(CommentRow::from).collect();
        }
    }

    /// Post form submit. Update when `id` is filled, create otherwise.
    pub async fn save_post(&mut self, id: &str, title: &str, views: i64) {
        let command = SavePostCommand {
            id: id.to_owned(),
            title: title.to_owned(),
            views,
        };
        let saved = self.mediator.lock().await.send(command).await;
        if let Ok(Some(_)) = saved {
            self.refresh_posts().await;
        }
    }

    /// Delete button on a post row; soft per the post deletion policy, so
    /// the row survives and comes back struck through.
    pub async fn delete_post(&mut self, id: &str) {
        let deleted = self
            .mediator
            .lock()
            .await
            .send(DeletePostCommand(id.to_owned()))
            .await;
        if let Ok(true) = deleted {
            self.refresh_posts().await;
        }
    }

    /// Comment form submit; clears the form after a successful save.
    pub async fn save_comment(&mut self, id: &str, text: &str, post_id: &str) {
        let command = SaveCommentCommand {
            id: id.to_owned(),
            text: text.to_owned(),
            post_id: post_id.to_owned(),
        };
        let saved = self.mediator.lock().await.send(command).await;
        if let Ok(Some(_)) = saved {
            self.comment_form = CommentForm::default();
            self.refresh_comments().await;
        }
    }

    /// Edit button on a comment row: fetches the record and fills the
    /// form. The record is not locked against concurrent edits.
    pub async fn edit_comment(&mut self, id: &str) {
        let fetched = self
            .mediator
            .lock()
            .await
            .send(EditCommentRequest(id.to_owned()))
            .await;
        if let Ok(Some(form)) = fetched {
            self.comment_form = form;
        }
    }

    /// Delete button on a comment row. Comments delete for real, so the
    /// confirmation hook gets the last word before anything is sent.
    pub async fn delete_comment(&mut self, id: &str) {
        if Comment::DELETION == DeletionPolicy::Hard {
            if let Some(confirm) = &self.confirm_delete {
                if !confirm(id) {
                    return;
                }
            }
        }
        let deleted = self
            .mediator
            .lock()
            .await
            .send(DeleteCommentCommand(id.to_owned()))
            .await;
        if let Ok(true) = deleted {
            self.refresh_comments().await;
        }
    }

    pub fn posts(&self) -> &[PostRow] {
        &self.posts
    }

    pub fn comments(&self) -> &[CommentRow] {
        &self.comments
    }

    pub fn comment_form(&self) -> &CommentForm {
        &self.comment_form
    }
}
