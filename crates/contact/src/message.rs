use serde::{Deserialize, Serialize};
use validator::Validate;

/// The four-field record a visitor submits through the contact form.
///
/// All fields are free text. The only rule enforced anywhere is that every
/// field is non-empty at submission time; email format, country existence and
/// message content are deliberately left unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactMessage {
    /// True when every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}
