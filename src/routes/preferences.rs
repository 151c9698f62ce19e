use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::preferences::SavePreferencesForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::preferences::{load_preferences, save_preferences};

#[post("/v1/preferences")]
/// Save a seeker's preferences, replacing any stored record.
pub async fn api_save_preferences(
    repo: web::Data<DieselRepository>,
    form: web::Json<SavePreferencesForm>,
) -> impl Responder {
    match save_preferences(repo.get_ref(), form.into_inner()) {
        Ok(preferences) => HttpResponse::Ok().json(preferences),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(message),
        Err(err) => {
            log::error!("Failed to save preferences: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/preferences/{user_id}")]
pub async fn api_get_preferences(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let user_id = path.into_inner();

    match load_preferences(repo.get_ref(), user_id) {
        Ok(preferences) => HttpResponse::Ok().json(preferences),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to fetch preferences for user {user_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
