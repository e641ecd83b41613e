//! Member directory with dynamic, paged member search.
//!
//! The `data` feature builds the persistence layer only; `server` adds the
//! Actix-web application on top.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{build_app, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::body::MessageBody;
    use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
    use actix_web::{App, Error, HttpServer, middleware, web};

    use crate::db::{establish_connection_pool, run_migrations};
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::api::{list_teams_v1, search_members_v1, search_members_v2, search_members_v3};
    use crate::routes::query_error_handler;
    use crate::services::init::seed_sample_members;

    /// Assembles the application with its routes and shared state.
    pub fn build_app(
        repo: DieselRepository,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::Data::new(repo))
            .service(search_members_v1)
            .service(search_members_v2)
            .service(search_members_v3)
            .service(list_teams_v1)
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        run_migrations(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

        let repo = DieselRepository::new(pool);

        if server_config.seed_sample_data {
            seed_sample_members(&repo)
                .map_err(|e| std::io::Error::other(format!("Failed to seed sample data: {e}")))?;
        }

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || build_app(repo.clone()))
            .bind(bind_address)?
            .run()
            .await
    }
}
