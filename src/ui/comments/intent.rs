use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CommentIntent {
    Input(char),
    Backspace,
    /// Accepted but goes nowhere; the draft is kept.
    Submitted,
    /// Screen left; the draft is dropped.
    Cleared,
}

impl Intent for CommentIntent {}
