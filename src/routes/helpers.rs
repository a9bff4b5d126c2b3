use std::error::Error;

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};
use tera::Tera;

use crate::waitlist_form::FormState;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

pub fn e500<T>(e: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    actix_web::error::ErrorInternalServerError(e)
}

/// Renders the landing page around the given waitlist form state.
pub fn render_home(
    templates: &Tera,
    state: &FormState,
    status_code: StatusCode,
) -> Result<HttpResponse, actix_web::Error> {
    let mut ctx = tera::Context::new();
    ctx.insert("form", state);
    ctx.insert("message", &state.status.message());

    let page = templates.render("home.html", &ctx).map_err(e500)?;

    Ok(HttpResponse::build(status_code)
        .content_type(ContentType::html())
        .body(page))
}
