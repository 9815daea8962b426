use std::sync::{Arc, atomic::Ordering};

use brightwave_contact::{ContactMessage, FormController, Gateway};

mod helpers;

use helpers::{FailAfterStore, FailingStore, RecordingStore, sample_message};

fn controller_with_recording() -> (FormController<Arc<RecordingStore>>, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::default());
    let controller = FormController::new(Gateway::new(store.clone()));

    (controller, store)
}

#[tokio::test]
async fn submit_with_missing_required_field_never_reaches_store() {
    let (mut controller, store) = controller_with_recording();

    controller.set_name("Amy");
    controller.set_email("a@x.com");
    controller.set_country("Senegal");
    // message left empty

    controller.submit().await;

    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    assert!(!controller.state().is_submitting);
    assert!(!controller.state().success_message);
    assert!(!controller.state().error_message);
}

#[tokio::test]
async fn successful_submit_clears_form_and_sets_success_flag() {
    let (mut controller, store) = controller_with_recording();

    controller.set_form_data(sample_message());
    controller.submit().await;

    let state = controller.state();
    assert_eq!(state.form_data, ContactMessage::default());
    assert!(state.success_message);
    assert!(!state.error_message);
    assert!(!state.is_submitting);
    assert_eq!(store.inserted.lock().unwrap().as_slice(), &[sample_message()]);
}

#[tokio::test]
async fn failed_submit_retains_form_and_sets_error_flag() {
    let mut controller = FormController::new(Gateway::new(FailingStore::new("network down")));

    controller.set_form_data(sample_message());
    controller.submit().await;

    let state = controller.state();
    assert_eq!(state.form_data, sample_message());
    assert!(state.error_message);
    assert!(!state.success_message);
    assert!(!state.is_submitting);
}

#[tokio::test]
async fn next_submit_clears_previous_outcome_flags() {
    // First insert succeeds, every later one fails.
    let mut controller = FormController::new(Gateway::new(FailAfterStore::new(1, "boom")));

    controller.set_form_data(sample_message());
    controller.submit().await;
    assert!(controller.state().success_message);
    assert!(!controller.state().error_message);

    // A failed attempt on the same controller replaces the success banner.
    controller.set_form_data(sample_message());
    controller.submit().await;
    assert!(!controller.state().success_message);
    assert!(controller.state().error_message);

    // Retrying with the retained data keeps clearing the stale flag first.
    controller.submit().await;
    assert!(controller.state().error_message);
    assert!(!controller.state().success_message);
}

#[tokio::test]
async fn field_setters_publish_snapshots_to_observers() {
    let (mut controller, _store) = controller_with_recording();
    let mut rx = controller.subscribe();

    controller.set_name("Amy");
    controller.set_email("a@x.com");
    controller.set_country("Senegal");
    controller.set_message("Hello");

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.form_data, sample_message());
    assert!(!snapshot.is_submitting);
}

#[tokio::test]
async fn submit_publishes_final_state_to_observers() {
    let (mut controller, _store) = controller_with_recording();
    let mut rx = controller.subscribe();

    controller.set_form_data(sample_message());
    controller.submit().await;

    let snapshot = rx.borrow_and_update().clone();
    assert!(snapshot.success_message);
    assert!(!snapshot.is_submitting);
    assert_eq!(snapshot.form_data, ContactMessage::default());
}
