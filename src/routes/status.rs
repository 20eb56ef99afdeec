use actix_web::{web, HttpResponse};
use crate::config::Config;
use crate::models::status::StatusResponse;

/// Toutes méthodes, tous chemins : 200 + {ok, msg, time}.
/// La requête (headers, body) est ignorée.
pub async fn respond(config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::now(config.message.as_str()))
}
