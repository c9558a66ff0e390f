use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bocce_stats::{
    build_router,
    player::{GameModel, PlayerModel},
    AppState, InMemoryPlayerRepository,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub router: Router,
    pub repository: Arc<InMemoryPlayerRepository>,
}

impl TestSetup {
    /// Posts a GraphQL document and returns the status with the parsed body
    pub async fn graphql(&self, query: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "query": query }).to_string()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    /// Like `graphql`, but expects success and returns only `data`
    pub async fn data(&self, query: &str) -> Value {
        let (status, body) = self.graphql(query).await;
        assert_eq!(status, StatusCode::OK, "unexpected response: {}", body);
        body["data"].clone()
    }
}

pub struct TestSetupBuilder {
    players: Vec<PlayerModel>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    pub fn with_player(mut self, id: i64, name: &str, games: Vec<GameModel>) -> Self {
        let mut player = PlayerModel::new(id, name.to_string());
        player.games = games;
        self.players.push(player);
        self
    }

    pub fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryPlayerRepository::with_players(self.players));
        let router = build_router(AppState::new(repository.clone()));

        TestSetup { router, repository }
    }
}

/// Game fixture with only the required fields set
pub fn game(date: &str, opponent: &str, result: &str, score: &str) -> GameModel {
    GameModel {
        date: date.to_string(),
        opponent: opponent.to_string(),
        score: Some(score.to_string()),
        result: result.to_string(),
        ball_color: None,
        location: None,
        weather: None,
        duration: None,
        notes: None,
    }
}
