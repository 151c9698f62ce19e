use std::env;
use std::time::Duration;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use jobboard::cache::{DEFAULT_TAG_CACHE_TTL, InMemoryTagCache};
use jobboard::db::establish_connection_pool;
use jobboard::repository::DieselRepository;
use jobboard::routes::jobs::{
    api_browse_jobs, api_create_job, api_delete_job, api_get_job, api_recommended_jobs,
    api_recruiter_jobs, api_update_job,
};
use jobboard::routes::preferences::{api_get_preferences, api_save_preferences};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let cache_ttl = env::var("TAG_CACHE_TTL")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TAG_CACHE_TTL);

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);
    let tag_cache = web::Data::new(InMemoryTagCache::with_ttl(cache_ttl));

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(api_create_job)
                    .service(api_browse_jobs)
                    // Registered before the `{job_id}` matcher on purpose.
                    .service(api_recommended_jobs)
                    .service(api_get_job)
                    .service(api_recruiter_jobs)
                    .service(api_update_job)
                    .service(api_delete_job)
                    .service(api_save_preferences)
                    .service(api_get_preferences),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(tag_cache.clone())
    })
    .bind((address, port))?
    .run()
    .await
}
