use crate::ui::comments::intent::CommentIntent;
use crate::ui::comments::state::CommentFormState;
use crate::ui::mvi::Reducer;

pub struct CommentReducer;

impl Reducer for CommentReducer {
    type State = CommentFormState;
    type Intent = CommentIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CommentIntent::Input(ch) => {
                state.text.push(ch);
            }
            CommentIntent::Backspace => {
                state.text.pop();
            }
            CommentIntent::Submitted => {
                // TODO: wire to the comments endpoint once the backend
                // exposes one. Until then the draft stays as typed.
            }
            CommentIntent::Cleared => {
                state.text.clear();
            }
        }
        state
    }
}
