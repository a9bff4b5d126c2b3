use actix_web::{HttpResponse, http::StatusCode, web};
use tera::Tera;

use super::helpers::render_home;
use crate::waitlist_form::FormState;

pub async fn home(templates: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    render_home(&templates, &FormState::default(), StatusCode::OK)
}
