use crate::ui::feed::intent::FeedIntent;
use crate::ui::feed::state::FeedState;
use crate::ui::mvi::Reducer;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::LoadStarted => FeedState::Loading,
            FeedIntent::Loaded { posts } => FeedState::Ready { posts, selected: 0 },
            FeedIntent::LoadFailed => FeedState::Failed,
            FeedIntent::MoveUp => match state {
                FeedState::Ready { posts, selected } if !posts.is_empty() => {
                    let selected = if selected == 0 {
                        posts.len() - 1
                    } else {
                        selected - 1
                    };
                    FeedState::Ready { posts, selected }
                }
                other => other,
            },
            FeedIntent::MoveDown => match state {
                FeedState::Ready { posts, selected } if !posts.is_empty() => {
                    let selected = if selected + 1 >= posts.len() {
                        0
                    } else {
                        selected + 1
                    };
                    FeedState::Ready { posts, selected }
                }
                other => other,
            },
        }
    }
}
