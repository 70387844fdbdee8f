//! src/routes/waitlist.rs
use crate::domain::SubmissionResult;
use crate::routes::SHOW_MODAL;
use crate::waitlist::{submission_result, SubscribeError, Waitlist};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use actix_web_flash_messages::FlashMessage;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct WaitlistForm {
    #[serde(default)]
    pub email: String,
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubscribeError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.submission_result())
    }
}

#[tracing::instrument(
    name = "Joining the waitlist",
    skip(form, waitlist),
    fields(
        request_id = %Uuid::new_v4(),
        waitlist_email = %form.email
    )
)]
pub async fn join_waitlist(
    form: web::Form<WaitlistForm>,
    waitlist: web::Data<Waitlist>,
) -> Result<HttpResponse, SubscribeError> {
    waitlist.submit(form.into_inner().email).await?;
    Ok(HttpResponse::Ok().json(SubmissionResult::accepted()))
}

/// Same workflow as [`join_waitlist`] for browsers posting the plain HTML
/// form: the outcome travels back to `/` as flash messages.
#[tracing::instrument(
    name = "Joining the waitlist from the landing page",
    skip(form, waitlist),
    fields(
        request_id = %Uuid::new_v4(),
        waitlist_email = %form.email
    )
)]
pub async fn join_waitlist_form(
    form: web::Form<WaitlistForm>,
    waitlist: web::Data<Waitlist>,
) -> HttpResponse {
    let result = waitlist.submit(form.into_inner().email).await;
    if let Err(e) = &result {
        tracing::warn!(error.cause_chain = ?e, "Waitlist submission was not accepted");
    }

    let outcome = submission_result(&result);
    if outcome.success {
        FlashMessage::success(outcome.message.clone()).send();
    } else {
        FlashMessage::error(outcome.message.clone()).send();
    }
    if outcome.show_modal() {
        FlashMessage::info(SHOW_MODAL.to_string()).send();
    }

    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

#[tracing::instrument(name = "Listing fallback waitlist emails", skip(waitlist))]
pub async fn list_waitlist(waitlist: web::Data<Waitlist>) -> HttpResponse {
    HttpResponse::Ok().json(waitlist.fallback().list())
}
