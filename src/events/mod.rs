use mediator::Event;

use crate::models::{Comment, Post};

/// Published after a post create or full-replace update went through.
#[derive(Debug, Clone)]
pub struct PostSavedEvent(pub Post);
impl Event for PostSavedEvent {}

/// Published after a post was soft-deleted. Carries the id; the record
/// itself stays in the collection.
#[derive(Debug, Clone)]
pub struct PostDeletedEvent(pub String);
impl Event for PostDeletedEvent {}

#[derive(Debug, Clone)]
pub struct CommentSavedEvent(pub Comment);
impl Event for CommentSavedEvent {}

#[derive(Debug, Clone)]
pub struct CommentDeletedEvent(pub String);
impl Event for CommentDeletedEvent {}
