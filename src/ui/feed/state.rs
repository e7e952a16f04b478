use crate::api::Post;
use crate::ui::mvi::UiState;

/// Feed screen: the loaded cards and the selection cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeedState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready { posts: Vec<Post>, selected: usize },
    /// The load failed; the viewer can retry.
    Failed,
}

impl UiState for FeedState {}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Ready { posts, .. } => posts,
            _ => &[],
        }
    }

    pub fn selected(&self) -> usize {
        match self {
            Self::Ready { selected, .. } => *selected,
            _ => 0,
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        match self {
            Self::Ready { posts, selected } => posts.get(*selected),
            _ => None,
        }
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts().iter().find(|post| post.id == post_id)
    }
}
