use crate::{ContactMessage, ContactStore};

/// Outcome of a submission attempt. `error` carries the store error's message
/// text when `success` is false; it is surfaced to operators via the log, not
/// to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub success: bool,
    pub error: Option<String>,
}

/// Wraps the single insert against the contact-messages store and maps its
/// result to a binary outcome. One round trip, no retries.
#[derive(Clone)]
pub struct Gateway<S> {
    store: S,
}

impl<S: ContactStore> Gateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every store error, whatever its kind, collapses into the same failed
    /// outcome; the caller never sees an `Err`.
    pub async fn send_message(&self, message: &ContactMessage) -> SendOutcome {
        match self.store.insert_contact_message(message).await {
            Ok(()) => SendOutcome {
                success: true,
                error: None,
            },
            Err(err) => {
                tracing::error!("failed to insert contact message: {err}");

                SendOutcome {
                    success: false,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
