use tokio::sync::watch;

use crate::{ContactMessage, ContactStore, Gateway};

/// Snapshot of the form published to observers after each mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub form_data: ContactMessage,
    pub is_submitting: bool,
    pub success_message: bool,
    pub error_message: bool,
}

/// Owns the contact form's state and submission workflow.
///
/// Idle -> Submitting -> Succeeded | Failed, then back through Submitting on
/// the next attempt. Outcome flags stay set until the next submit clears
/// them. A rendering layer observes state through [`FormController::subscribe`]
/// or reads it directly with [`FormController::state`].
pub struct FormController<S> {
    gateway: Gateway<S>,
    state: FormState,
    tx: watch::Sender<FormState>,
}

impl<S: ContactStore> FormController<S> {
    pub fn new(gateway: Gateway<S>) -> Self {
        let state = FormState::default();
        let (tx, _) = watch::channel(state.clone());

        Self { gateway, state, tx }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Watch channel carrying a [`FormState`] snapshot per mutation.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.tx.subscribe()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.form_data.name = name.into();
        self.publish();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.form_data.email = email.into();
        self.publish();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.state.form_data.country = country.into();
        self.publish();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.state.form_data.message = message.into();
        self.publish();
    }

    pub fn set_form_data(&mut self, form_data: ContactMessage) {
        self.state.form_data = form_data;
        self.publish();
    }

    /// Runs one submission attempt to completion.
    ///
    /// Inert while a submit is already in flight or while any required field
    /// is empty; the gateway is not invoked in either case. On success the
    /// form is cleared for the next visitor; on failure it is kept as typed
    /// so the visitor can resubmit.
    pub async fn submit(&mut self) {
        if self.state.is_submitting {
            return;
        }

        if !self.state.form_data.is_complete() {
            return;
        }

        self.state.is_submitting = true;
        self.state.success_message = false;
        self.state.error_message = false;
        self.publish();

        let outcome = self.gateway.send_message(&self.state.form_data).await;

        self.state.is_submitting = false;

        if outcome.success {
            self.state.success_message = true;
            self.state.form_data = ContactMessage::default();
        } else {
            self.state.error_message = true;
        }

        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(self.state.clone());
    }
}
