//! Page routes: list, add, view, edit and save.
//!
//! `/view/*`, `/edit/*` and `/save/*` run the title matcher before touching
//! the store; a path that fails it is a plain 404. Every other path falls
//! through to the listing.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use super::form::FormFields;
use crate::notes::title::match_route;
use crate::notes::{ListPageInfo, Page, PageAction, PageTitle};
use crate::render::RenderError;
use crate::AppState;

/// Upper bound on a submitted form body (page bodies travel in forms)
const MAX_FORM_BYTES: usize = 1024 * 1024;

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("404 page not found")
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body("Internal Server Error")
}

fn bad_request(message: &'static str) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn render<T: Serialize>(state: &AppState, name: &str, payload: &T) -> HttpResponse {
    let rendered = serde_json::to_value(payload)
        .map_err(RenderError::from)
        .and_then(|ctx| state.renderer.render(name, &ctx));

    match rendered {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("[PAGES] Failed to render '{}': {}", name, e);
            internal_error()
        }
    }
}

/// Extract the title for `action` from the percent-decoded request path
fn routed_title(req: &HttpRequest, action: PageAction) -> Option<PageTitle> {
    let decoded = urlencoding::decode(req.path()).ok()?;
    match match_route(&decoded) {
        Some((matched, title)) if matched == action => Some(title),
        _ => {
            log::debug!("[PAGES] No {} route for {}", action.as_str(), req.path());
            None
        }
    }
}

fn save_and_redirect(state: &AppState, title: &PageTitle, body: &[u8]) -> HttpResponse {
    match state.store.save(title, body) {
        Ok(()) => redirect(format!("/view/{}", title)),
        Err(e) => {
            log::error!("[PAGES] Failed to save page {}: {}", title, e);
            internal_error()
        }
    }
}

// --- List ---

async fn list_pages(data: web::Data<AppState>) -> HttpResponse {
    let info = ListPageInfo::new(data.store.list_all());
    render(&data, "list", &info)
}

// --- Add ---

async fn add_form(data: web::Data<AppState>) -> HttpResponse {
    render(&data, "add", &serde_json::json!({}))
}

async fn add_page(data: web::Data<AppState>, payload: web::Bytes) -> HttpResponse {
    let form = FormFields::parse(&payload);

    let Ok(raw) = std::str::from_utf8(form.get("title")) else {
        log::debug!("[PAGES] Rejected add: title is not UTF-8");
        return bad_request("Title may only contain letters and digits");
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return bad_request("Title is required");
    }

    let title = match PageTitle::parse(raw) {
        Ok(title) => title,
        Err(e) => {
            log::debug!("[PAGES] Rejected add: {}", e);
            return bad_request("Title may only contain letters and digits");
        }
    };

    save_and_redirect(&data, &title, form.get("body"))
}

// --- View / edit / save ---

async fn view_page(data: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let Some(title) = routed_title(&req, PageAction::View) else {
        return not_found();
    };

    match data.store.load(&title) {
        Ok(page) => render(&data, "view", &page),
        Err(e) => {
            // Missing pages are an invitation to create them
            log::debug!("[PAGES] {}; redirecting to editor", e);
            redirect(format!("/edit/{}", title))
        }
    }
}

async fn edit_page(data: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let Some(title) = routed_title(&req, PageAction::Edit) else {
        return not_found();
    };

    let page = data
        .store
        .load(&title)
        .unwrap_or_else(|_| Page::stub(title.as_str()));
    render(&data, "edit", &page)
}

async fn save_page(
    data: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Bytes,
) -> HttpResponse {
    let Some(title) = routed_title(&req, PageAction::Save) else {
        return not_found();
    };

    let form = FormFields::parse(&payload);
    save_and_redirect(&data, &title, form.get("body"))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_FORM_BYTES))
        .service(
            web::resource("/add")
                .route(web::get().to(add_form))
                .route(web::post().to(add_page)),
        )
        .service(web::resource("/view/{tail:.*}").route(web::get().to(view_page)))
        .service(web::resource("/edit/{tail:.*}").route(web::get().to(edit_page)))
        .service(web::resource("/save/{tail:.*}").route(web::post().to(save_page)))
        .default_service(web::to(list_pages));
}
