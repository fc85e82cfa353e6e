//! Collapsing tagged results into displayable text.

use scribe_error::{ModelErrorKind, ScribeResult};

/// Turn a model result into text that can always be shown to a user.
///
/// Success yields the model's text unchanged; failures yield a line starting
/// with `Error:` describing the problem.
///
/// # Examples
///
/// ```
/// use scribe_error::{ModelError, ModelErrorKind, ScribeResult};
/// use scribe_interface::DisplayText;
///
/// let ok: ScribeResult<String> = Ok("Coffee is old.".to_string());
/// assert_eq!(ok.into_display_text(), "Coffee is old.");
///
/// let failed: ScribeResult<String> = Err(ModelError::new(ModelErrorKind::Status {
///     status: 500,
///     body: "boom".to_string(),
/// })
/// .into());
/// assert_eq!(failed.into_display_text(), "Error: 500 - boom");
/// ```
pub trait DisplayText {
    /// Collapse into display text.
    fn into_display_text(self) -> String;
}

impl DisplayText for ScribeResult<String> {
    fn into_display_text(self) -> String {
        match self {
            Ok(text) => text,
            Err(err) => match err.model_kind() {
                Some(ModelErrorKind::Status { status, body }) if body.is_empty() => {
                    format!("Error: {}", status)
                }
                Some(kind) => format!("Error: {}", kind),
                None => format!("Error: {}", err),
            },
        }
    }
}
