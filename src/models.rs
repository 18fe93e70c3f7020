//! Frontend Models
//!
//! UI-only data structures. Backend entities live in `recipe_core`.

use recipe_core::RecipeId;

/// Toast severity, also its CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warn,
}

impl ToastKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warn => "warn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Distinguishes consecutive toasts with the same text
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Which page section is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Recipes,
    Shopping,
}

/// The single modal that may be open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Instructions { title: String, text: String },
    Edit(RecipeId),
    Delete { id: RecipeId, name: String },
}
