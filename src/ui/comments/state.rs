use crate::ui::mvi::UiState;

/// Comment draft under the read screen.
///
/// Collects and validates text only; nothing is sent anywhere on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFormState {
    pub text: String,
}

impl UiState for CommentFormState {}

impl CommentFormState {
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
