use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ComposeIntent {
    /// Screen opened. Without a token this routes to `LoginRequired`
    /// instead of the form.
    Opened { has_token: bool },
    Closed,
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    CategoryNext,
    CategoryPrev,
    /// Submit the form. Ignored while incomplete or already submitting.
    SubmitRequested,
    SubmitSucceeded,
    /// Publish failed; the draft is kept so nothing typed is lost.
    SubmitFailed,
}

impl Intent for ComposeIntent {}
