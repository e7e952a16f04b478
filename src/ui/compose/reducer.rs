use crate::api::CATEGORIES;
use crate::ui::compose::intent::ComposeIntent;
use crate::ui::compose::state::{ComposeField, ComposeState};
use crate::ui::mvi::Reducer;

pub struct ComposeReducer;

impl Reducer for ComposeReducer {
    type State = ComposeState;
    type Intent = ComposeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposeIntent::Opened { has_token } => {
                if has_token {
                    ComposeState::editing()
                } else {
                    ComposeState::LoginRequired
                }
            }
            ComposeIntent::Closed => ComposeState::Hidden,
            ComposeIntent::Input(ch) => match state {
                ComposeState::Editing {
                    mut title,
                    mut content,
                    category,
                    mut image_path,
                    focused,
                    submitting,
                } if !submitting => {
                    match focused {
                        ComposeField::Title => title.push(ch),
                        ComposeField::Content => content.push(ch),
                        // Category is picked from the fixed list, not typed.
                        ComposeField::Category => {}
                        ComposeField::ImagePath => image_path.push(ch),
                    }
                    ComposeState::Editing {
                        title,
                        content,
                        category,
                        image_path,
                        focused,
                        submitting,
                    }
                }
                other => other,
            },
            ComposeIntent::Backspace => match state {
                ComposeState::Editing {
                    mut title,
                    mut content,
                    category,
                    mut image_path,
                    focused,
                    submitting,
                } if !submitting => {
                    match focused {
                        ComposeField::Title => {
                            title.pop();
                        }
                        ComposeField::Content => {
                            content.pop();
                        }
                        ComposeField::Category => {}
                        ComposeField::ImagePath => {
                            image_path.pop();
                        }
                    }
                    ComposeState::Editing {
                        title,
                        content,
                        category,
                        image_path,
                        focused,
                        submitting,
                    }
                }
                other => other,
            },
            ComposeIntent::FocusNext => with_focus(state, ComposeField::next),
            ComposeIntent::FocusPrev => with_focus(state, ComposeField::prev),
            ComposeIntent::CategoryNext => with_category(state, |category| {
                (category + 1) % CATEGORIES.len()
            }),
            ComposeIntent::CategoryPrev => with_category(state, |category| {
                (category + CATEGORIES.len() - 1) % CATEGORIES.len()
            }),
            ComposeIntent::SubmitRequested => {
                if !state.is_complete() || state.is_submitting() {
                    return state;
                }
                match state {
                    ComposeState::Editing {
                        title,
                        content,
                        category,
                        image_path,
                        focused,
                        ..
                    } => ComposeState::Editing {
                        title,
                        content,
                        category,
                        image_path,
                        focused,
                        submitting: true,
                    },
                    other => other,
                }
            }
            ComposeIntent::SubmitSucceeded => ComposeState::Hidden,
            ComposeIntent::SubmitFailed => match state {
                ComposeState::Editing {
                    title,
                    content,
                    category,
                    image_path,
                    focused,
                    ..
                } => ComposeState::Editing {
                    title,
                    content,
                    category,
                    image_path,
                    focused,
                    submitting: false,
                },
                other => other,
            },
        }
    }
}

fn with_focus(state: ComposeState, advance: fn(ComposeField) -> ComposeField) -> ComposeState {
    match state {
        ComposeState::Editing {
            title,
            content,
            category,
            image_path,
            focused,
            submitting,
        } if !submitting => ComposeState::Editing {
            title,
            content,
            category,
            image_path,
            focused: advance(focused),
            submitting,
        },
        other => other,
    }
}

fn with_category(state: ComposeState, advance: fn(usize) -> usize) -> ComposeState {
    match state {
        ComposeState::Editing {
            title,
            content,
            category,
            image_path,
            focused: ComposeField::Category,
            submitting,
        } if !submitting => ComposeState::Editing {
            title,
            content,
            category: advance(category),
            image_path,
            focused: ComposeField::Category,
            submitting,
        },
        other => other,
    }
}
