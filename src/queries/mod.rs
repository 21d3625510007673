mod get_all_comments;
mod get_all_posts;
mod get_comment;
mod load_catalog;

pub use get_all_comments::*;
pub use get_all_posts::*;
pub use get_comment::*;
pub use load_catalog::*;
