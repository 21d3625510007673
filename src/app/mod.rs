//! Application wiring: configuration, the shared mediator and the two
//! page shells.

mod catalog;
mod debounce;
mod records;

pub use catalog::CatalogApp;
pub use debounce::Debouncer;
pub use records::RecordsApp;

use std::sync::Arc;

use mediator::DefaultAsyncMediator;
use tokio::sync::Mutex;

use crate::catalog::{FallbackSource, HttpProductSource, ProductSource};
use crate::commands::{
    DeleteCommentRequestHandler, DeletePostRequestHandler, SaveCommentRequestHandler,
    SavePostRequestHandler,
};
use crate::events::{CommentDeletedEvent, CommentSavedEvent, PostDeletedEvent, PostSavedEvent};
use crate::models::{Comment, Post};
use crate::queries::{
    EditCommentRequestHandler, GetAllCommentsRequestHandler, GetAllPostsRequestHandler,
    LoadCatalogRequestHandler,
};
use crate::records::{RecordStore, RestCollection};

pub type SharedMediator = Arc<Mutex<DefaultAsyncMediator>>;

/// Endpoints of the two data sources. There is no environment or file
/// based configuration; callers override the fields they care about.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Primary static JSON document holding the product array.
    pub catalog_primary_url: String,
    /// Same schema, used once when the primary fails.
    pub catalog_fallback_url: String,
    /// Base URL of the REST mock backend serving /posts and /comments.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            catalog_primary_url: "https://api.escuelajs.co/api/v1/products".to_owned(),
            catalog_fallback_url: "http://localhost:3000/db.json".to_owned(),
            api_base_url: "http://localhost:3000".to_owned(),
        }
    }
}

/// Registers every handler and the logging subscribers on one mediator.
///
/// Must run inside a multi-threaded tokio runtime; the async mediator
/// builder blocks in place while registering.
pub fn build_mediator<P, PS, CS>(
    catalog: Arc<P>,
    posts: Arc<PS>,
    comments: Arc<CS>,
) -> SharedMediator
where
    P: ProductSource + 'static,
    PS: RecordStore<Post> + 'static,
    CS: RecordStore<Comment> + 'static,
{
    let mediator = DefaultAsyncMediator::builder()
        // Queries
        .add_handler(LoadCatalogRequestHandler(catalog))
        .add_handler(GetAllPostsRequestHandler(posts.clone()))
        .add_handler(GetAllCommentsRequestHandler(comments.clone()))
        .add_handler(EditCommentRequestHandler(comments.clone()))
        // Commands
        .add_handler_deferred(|m| SavePostRequestHandler(posts.clone(), m))
        .add_handler_deferred(|m| DeletePostRequestHandler(posts.clone(), m))
        .add_handler_deferred(|m| SaveCommentRequestHandler(comments.clone(), m))
        .add_handler_deferred(|m| DeleteCommentRequestHandler(comments.clone(), m))
        // Events
        .subscribe_fn(|event: PostSavedEvent| async move {
            log::info!("saved post {} ({} views)", event.0.id, event.0.views);
        })
        .subscribe_fn(|event: PostDeletedEvent| async move {
            log::info!("soft-deleted post {}", event.0);
        })
        .subscribe_fn(|event: CommentSavedEvent| async move {
            log::info!("saved comment {} on post {}", event.0.id, event.0.post_id);
        })
        .subscribe_fn(|event: CommentDeletedEvent| async move {
            log::info!("deleted comment {}", event.0);
        })
        .build();

    Arc::new(Mutex::new(mediator))
}

/// Builds the two page shells against real HTTP services. Like
/// [`build_mediator`], call it from inside a multi-threaded tokio runtime.
///
/// One `reqwest` client is shared across the catalog sources and both
/// record collections. No request timeouts are configured, matching the
/// behavior this client reproduces.
pub fn connect(config: ClientConfig) -> (CatalogApp, RecordsApp) {
    let client = reqwest::Client::new();

    let source = FallbackSource::new(
        HttpProductSource::new(client.clone(), config.catalog_primary_url),
        HttpProductSource::new(client.clone(), config.catalog_fallback_url),
    );
    let posts = RestCollection::<Post>::new(client.clone(), format!("{}/posts", config.api_base_url));
    let comments =
        RestCollection::<Comment>::new(client, format!("{}/comments", config.api_base_url));

    let mediator = build_mediator(Arc::new(source), Arc::new(posts), Arc::new(comments));
    (CatalogApp::new(mediator.clone()), RecordsApp::new(mediator))
}
