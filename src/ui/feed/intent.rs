use crate::api::Post;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FeedIntent {
    LoadStarted,
    Loaded { posts: Vec<Post> },
    LoadFailed,
    MoveUp,
    MoveDown,
}

impl Intent for FeedIntent {}
