mod config;
mod error;
mod listener;
mod logging;
mod models;
mod routes;

use actix_web::{App, HttpServer, middleware, web};

use crate::config::Config;
use crate::error::AppError;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    let port = config.port;
    tracing::debug!(?config, "configuration loaded");

    let data = web::Data::new(config);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    });

    for listener in listener::bind_all(port)? {
        server = server.listen(listener)?;
    }

    println!("Listening on :{}", port);

    server.run().await?;

    tracing::info!("server stopped");
    Ok(())
}
