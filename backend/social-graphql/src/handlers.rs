//! HTTP routes for the GraphQL API

use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::schema::AppSchema;

pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn health_handler() -> &'static str {
    "ok"
}

/// SDL (Schema Definition Language) endpoint for client code generation
pub async fn schema_handler(schema: web::Data<AppSchema>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(schema.sdl())
}

pub async fn graphiql_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Registers the API routes. With `playground` on, `GET /graphql` serves
/// GraphiQL; otherwise it executes the query carried in the query string.
pub fn configure(cfg: &mut web::ServiceConfig, playground: bool) {
    cfg.route("/graphql", web::post().to(graphql_handler));

    if playground {
        cfg.route("/graphql", web::get().to(graphiql_handler));
    } else {
        cfg.route("/graphql", web::get().to(graphql_handler));
    }

    cfg.route("/graphql/schema", web::get().to(schema_handler))
        .route("/health", web::get().to(health_handler));
}
