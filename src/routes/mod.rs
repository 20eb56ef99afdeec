pub mod status;

use actix_web::web;

/// Un seul handler, enregistré comme service par défaut :
/// aucune route ne peut tomber en 404 ou 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(status::respond));
}
