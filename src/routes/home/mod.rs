//! src/routes/home/mod.rs
use crate::waitlist::Waitlist;
use actix_web::{http::header::ContentType, web, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};

mod cache;
pub use cache::PageCache;

mod page;
pub use page::{Toast, ToastKind};

/// Flash message content that asks the landing page to open the success modal.
pub const SHOW_MODAL: &str = "show-modal";

#[tracing::instrument(name = "GET /", skip(flash_messages, waitlist))]
pub async fn home(
    flash_messages: IncomingFlashMessages,
    waitlist: web::Data<Waitlist>,
) -> HttpResponse {
    let mut toast = None;
    let mut show_modal = false;

    for message in flash_messages.iter() {
        match message.level() {
            Level::Success => toast = Some(Toast::success(message.content())),
            Level::Error => toast = Some(Toast::error(message.content())),
            Level::Info if message.content() == SHOW_MODAL => show_modal = true,
            _ => {}
        }
    }

    let body = waitlist.page_cache().get_or_render(page::landing_page);

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::document(&body, toast.as_ref(), show_modal))
}
