use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::prelude::*;

use social_graphql::config::Config;
use social_graphql::handlers;
use social_graphql::schema::build_schema;
use social_graphql::store::SocialStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // JSON logs with span context for log aggregation
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,social_graphql=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_file(true)
                .with_target(true),
        )
        .init();

    info!("Starting social GraphQL API...");

    let config = Config::from_env().context("Failed to load configuration")?;

    let store = SocialStore::new();
    let stats = store.stats().await;
    info!(
        users = stats.users,
        posts = stats.posts,
        comments = stats.comments,
        "Store seeded"
    );

    let schema = build_schema(store, &config.graphql);
    let playground = config.graphql.playground;

    let bind_addr = config.bind_addr();
    info!(
        workers = config.server.workers,
        playground,
        max_depth = config.graphql.max_depth,
        "GraphQL server listening on http://{}/graphql",
        bind_addr
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(schema.clone()))
            .configure(|cfg| handlers::configure(cfg, playground))
    })
    .workers(config.server.workers)
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
