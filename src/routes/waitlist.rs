use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use tera::Tera;

use super::helpers::render_home;
use crate::{waitlist_form::WaitlistForm, waitlist_store::WaitlistStore};

#[derive(serde::Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: String,
}

#[tracing::instrument(
    name = "Joining the waitlist",
    skip(form, store, templates),
    fields(
        waitlist_email = %form.email,
        waitlist_city = %form.city
    )
)]
pub async fn join_waitlist<S>(
    form: web::Form<FormData>,
    store: web::Data<S>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error>
where
    S: WaitlistStore + 'static,
{
    let FormData { email, city } = form.into_inner();

    let waitlist_form = WaitlistForm::with_input(store.get_ref(), email, city);
    let status_code = match waitlist_form.try_submit().await {
        Ok(_) => StatusCode::OK,
        Err(e) => e.status_code(),
    };

    render_home(&templates, &waitlist_form.state(), status_code)
}
