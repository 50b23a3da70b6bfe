//! Serves the travel-diary pages and the per-city comment API.
//!
//! Static assets come straight from the diary directory; comments live in a
//! single JSON file keyed by city name and are read and rewritten in full on
//! every request. Run with `--help` for the knobs; the defaults match the
//! deployed site (port 3000, `comments.json` next to the pages).

mod datatypes;
mod server;
mod storage;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use tracing::info;

use server::args::parse_args;
use server::routes::{get_comments, health, post_comment};
use storage::CommentStore;

#[actix_web::main]
async fn main() -> eyre::Result<()> {
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .unwrap();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_layer)
        .try_init();

    let args = parse_args();

    let store = web::Data::new(CommentStore::new(args.store_file.clone()));
    store.init().await?;

    info!("Serving diary pages from {}", args.static_dir.display());
    info!("Listening on http://{}:{}", args.bind, args.port);

    let static_dir = args.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .service(get_comments)
            .service(post_comment)
            .service(health)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;

    Ok(())
}
