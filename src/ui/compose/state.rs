use crate::api::{PostDraft, CATEGORIES};
use crate::ui::mvi::UiState;

/// Fields of the compose form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Title,
    Content,
    Category,
    ImagePath,
}

impl ComposeField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content => Self::Category,
            Self::Category => Self::ImagePath,
            Self::ImagePath => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::ImagePath,
            Self::Content => Self::Title,
            Self::Category => Self::Content,
            Self::ImagePath => Self::Category,
        }
    }
}

/// Compose screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ComposeState {
    #[default]
    Hidden,
    /// Opened without a stored token. The web client redirects to the
    /// login page here; this surface tells the viewer how to log in.
    LoginRequired,
    Editing {
        title: String,
        content: String,
        /// Index into [`CATEGORIES`].
        category: usize,
        image_path: String,
        focused: ComposeField,
        /// Set while a publish request is outstanding; blocks re-submit.
        submitting: bool,
    },
}

impl UiState for ComposeState {}

impl ComposeState {
    pub fn editing() -> Self {
        Self::Editing {
            title: String::new(),
            content: String::new(),
            category: 0,
            image_path: String::new(),
            focused: ComposeField::Title,
            submitting: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            Self::Editing {
                submitting: true,
                ..
            }
        )
    }

    /// All fields the backend requires are present.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Editing {
                title,
                content,
                image_path,
                ..
            } => {
                !title.trim().is_empty()
                    && !content.trim().is_empty()
                    && !image_path.trim().is_empty()
            }
            _ => false,
        }
    }

    pub fn category_name(&self) -> &'static str {
        match self {
            Self::Editing { category, .. } => CATEGORIES[*category % CATEGORIES.len()],
            _ => CATEGORIES[0],
        }
    }

    /// Snapshot of the form as a submittable draft.
    pub fn to_draft(&self) -> Option<PostDraft> {
        match self {
            Self::Editing {
                title,
                content,
                image_path,
                ..
            } => Some(PostDraft {
                title: title.clone(),
                content: content.clone(),
                category: self.category_name().to_string(),
                image_path: image_path.clone(),
            }),
            _ => None,
        }
    }
}
