use crate::error::ServiceError;
use crate::mvi::{Intent, Mutation, SideChannel};

#[derive(Debug, Clone)]
pub enum BookmarkEditIntent {
    /// Title field lost focus with this text.
    EditTitle(String),
    EditDescription(String),
    Save,
}

impl Intent for BookmarkEditIntent {}

#[derive(Debug, Clone)]
pub enum BookmarkEditMutation {
    SetTitle(String),
    SetDescription(String),
    SetLoading(bool),
    Saved,
    ShowError(ServiceError),
}

impl Mutation for BookmarkEditMutation {}

#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkEditEvent {
    /// Close the editor.
    Pop,
    Error(ServiceError),
}

impl SideChannel for BookmarkEditEvent {
    fn channel(&self) -> &'static str {
        match self {
            BookmarkEditEvent::Pop => "pop",
            BookmarkEditEvent::Error(_) => "error",
        }
    }

    fn error(&self) -> Option<&ServiceError> {
        match self {
            BookmarkEditEvent::Error(err) => Some(err),
            _ => None,
        }
    }
}
