use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, instrument, warn};

use crate::shared::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

/// HTTP handler for the landing route
///
/// GET /
pub async fn index() -> &'static str {
    "Bocce Stats API with GraphQL - Access the GraphQL interface at /graphql"
}

/// HTTP handler serving the interactive GraphiQL page
///
/// GET /graphql
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// HTTP handler executing a query or mutation
///
/// POST /graphql
/// Responds 200 when execution produced no errors, 400 otherwise
#[instrument(name = "execute_graphql", skip(state, request))]
pub async fn execute_graphql(State(state): State<AppState>, request: GraphQLRequest) -> Response {
    let request = request.into_inner();
    debug!(operation = ?request.operation_name, "Executing GraphQL request");

    let response = state.schema.execute(request).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        warn!(errors = ?response.errors, "GraphQL request failed");
        StatusCode::BAD_REQUEST
    };

    (status, GraphQLResponse::from(response)).into_response()
}
