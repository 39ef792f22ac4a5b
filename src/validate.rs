//! Rename Validation
//!
//! Client-side checks applied to an edited task text before any request is
//! sent.

/// Longest task text the server will store
pub const MAX_TASK_TEXT_LEN: usize = 255;

/// Why an edited text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTextError {
    Empty,
    TooLong,
    NoAlphanumeric,
}

impl TaskTextError {
    /// Alert text shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            TaskTextError::Empty => "Task cannot be empty!",
            TaskTextError::TooLong => "Task is too long!",
            TaskTextError::NoAlphanumeric => "Task must contain at least one letter or number.",
        }
    }
}

/// Validate an edited task text
///
/// Checks run in order against the trimmed value; the first failure wins.
pub fn validate_task_text(text: &str) -> Result<(), TaskTextError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskTextError::Empty);
    }
    if trimmed.chars().count() > MAX_TASK_TEXT_LEN {
        return Err(TaskTextError::TooLong);
    }
    if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(TaskTextError::NoAlphanumeric);
    }
    Ok(())
}

/// What a blur on the task editor should do
#[derive(Debug, Clone, PartialEq)]
pub enum RenamePlan {
    /// Text is unchanged, nothing to send
    Unchanged,
    /// Text failed validation, alert and send nothing
    Invalid(TaskTextError),
    /// Send the edited text as typed
    Send(String),
}

/// Decide whether an edit becomes a rename request
///
/// Validation runs before the unchanged check.
pub fn plan_rename(original: &str, edited: &str) -> RenamePlan {
    if let Err(err) = validate_task_text(edited) {
        return RenamePlan::Invalid(err);
    }
    if edited == original {
        return RenamePlan::Unchanged;
    }
    RenamePlan::Send(edited.to_string())
}
