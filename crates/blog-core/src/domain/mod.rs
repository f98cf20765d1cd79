//! Domain entities - the core business objects.

mod blog_post;
mod title_prefix;

pub use blog_post::BlogPost;
pub use title_prefix::TitlePrefix;
