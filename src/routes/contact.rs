use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use brightwave_contact::{ContactMessage, FormController};
use serde::Deserialize;

use crate::{
    routes::AppState,
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate, filters},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate)
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    pub country: String,
    pub message: String,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let mut controller = FormController::new(app_state.contact_gateway.clone());
    controller.set_form_data(ContactMessage {
        name: input.name,
        email: input.email,
        country: input.country,
        message: input.message,
    });

    controller.submit().await;

    let state = controller.state();

    if state.success_message {
        return template.render(ToastSuccessTemplate {
            message: "contact_submit_success",
        });
    }

    if state.error_message {
        return template.render(ToastErrorTemplate {
            message: "contact_submit_error",
        });
    }

    // Neither flag set: a required field was empty and the gateway was
    // never invoked. Browsers enforce the required attributes; this covers
    // direct posts.
    template.render(ToastErrorTemplate {
        message: "contact_required_fields",
    })
}
