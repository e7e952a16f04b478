//! REST client for the blogging service.

mod client;
mod error;
mod types;
pub mod worker;

pub use client::{BlogClient, BlogReadService, BlogService, LikeService, SUCCESS_STATUS};
pub use error::ApiError;
pub use types::{Post, PostDraft, PostWithLike, CATEGORIES};
