use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::graphql::{execute_graphql, graphiql, index, GRAPHQL_PATH};
use crate::shared::AppState;

/// Routes: landing text at `/`, GraphiQL on GET and execution on POST at `/graphql`
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(GRAPHQL_PATH, get(graphiql).post(execute_graphql))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
