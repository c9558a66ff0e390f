mod utils;

use axum::http::StatusCode;
use bocce_stats::PlayerRepository;
use serde_json::json;
use utils::{game, TestSetupBuilder};

#[tokio::test]
async fn add_player_then_fetch_returns_empty_games_and_zero_stats() {
    let setup = TestSetupBuilder::new().build();

    let added = setup
        .data(r#"mutation { addPlayer(name: "Alice") { player { id name games { date } } } }"#)
        .await;
    let id = added["addPlayer"]["player"]["id"].as_str().unwrap().to_string();
    assert_eq!(id, "1");
    assert_eq!(added["addPlayer"]["player"]["games"], json!([]));

    let query = format!(
        r#"{{ player(id: "{}") {{ name games {{ date }} stats {{ gamesPlayed gamesWon
            winPercentage redBallWinRate greenBallWinRate averagePoints highestScore
            currentStreak longestStreak }} }} }}"#,
        id
    );
    let data = setup.data(&query).await;

    assert_eq!(data["player"]["name"], "Alice");
    assert_eq!(data["player"]["games"], json!([]));
    assert_eq!(
        data["player"]["stats"],
        json!({
            "gamesPlayed": 0,
            "gamesWon": 0,
            "winPercentage": 0.0,
            "redBallWinRate": 0.0,
            "greenBallWinRate": 0.0,
            "averagePoints": 0.0,
            "highestScore": 0,
            "currentStreak": 0,
            "longestStreak": 0
        })
    );
}

#[tokio::test]
async fn recorded_games_drive_player_stats() {
    let setup = TestSetupBuilder::new()
        .with_player(1, "Alice", vec![])
        .build();

    for (date, result, score, color) in [
        ("2024-01-01", "win", "13-4", "red"),
        ("2024-01-02", "win", "13-11", "green"),
        ("2024-01-03", "loss", "9-13", "green"),
    ] {
        let mutation = format!(
            r#"mutation {{ addGame(playerId: "1", opponent: "Bob", date: "{}", score: "{}",
                result: "{}", ballColor: "{}") {{ success }} }}"#,
            date, score, result, color
        );
        let data = setup.data(&mutation).await;
        assert_eq!(data["addGame"]["success"], true);
    }

    let data = setup
        .data(r#"{ players { id stats { gamesPlayed gamesWon winPercentage redBallWinRate
            greenBallWinRate averagePoints highestScore currentStreak longestStreak } } }"#)
        .await;

    assert_eq!(
        data["players"][0]["stats"],
        json!({
            "gamesPlayed": 3,
            "gamesWon": 2,
            "winPercentage": 66.7,
            "redBallWinRate": 100.0,
            "greenBallWinRate": 50.0,
            "averagePoints": 11.7,
            "highestScore": 13,
            "currentStreak": 0,
            "longestStreak": 2
        })
    );
}

#[tokio::test]
async fn add_game_without_date_stores_today() {
    let setup = TestSetupBuilder::new()
        .with_player(1, "Alice", vec![])
        .build();

    let data = setup
        .data(r#"mutation { addGame(playerId: "1", opponent: "Bob", score: "13-2", result: "win") {
            success game { date } } }"#)
        .await;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(data["addGame"]["success"], true);
    assert_eq!(data["addGame"]["game"]["date"], today.as_str());

    let stored = setup.repository.get_player(1).await.unwrap().unwrap();
    assert_eq!(stored.games[0].date, today);
}

#[tokio::test]
async fn delete_game_removes_every_matching_duplicate() {
    let setup = TestSetupBuilder::new()
        .with_player(
            1,
            "Alice",
            vec![
                game("2024-01-01", "Bob", "win", "13-5"),
                game("2024-01-01", "Bob", "win", "13-5"),
                game("2024-01-01", "Carl", "loss", "6-13"),
                game("2024-01-02", "Bob", "loss", "7-13"),
            ],
        )
        .build();

    let data = setup
        .data(r#"mutation { deleteGame(playerId: "1", date: "2024-01-01", opponent: "Bob") { success } }"#)
        .await;
    assert_eq!(data["deleteGame"]["success"], true);

    let remaining = setup
        .data(r#"{ player(id: "1") { games { date opponent } } }"#)
        .await;
    assert_eq!(
        remaining["player"]["games"],
        json!([
            { "date": "2024-01-01", "opponent": "Carl" },
            { "date": "2024-01-02", "opponent": "Bob" }
        ])
    );

    let again = setup
        .data(r#"mutation { deleteGame(playerId: "1", date: "2024-01-01", opponent: "Bob") { success } }"#)
        .await;
    assert_eq!(again["deleteGame"]["success"], false);
}

#[tokio::test]
async fn deleted_id_is_reassigned_to_next_player() {
    let setup = TestSetupBuilder::new()
        .with_player(1, "Alice", vec![])
        .with_player(2, "Bob", vec![])
        .build();

    let deleted = setup
        .data(r#"mutation { deletePlayer(id: "1") { success } }"#)
        .await;
    assert_eq!(deleted["deletePlayer"]["success"], true);

    let added = setup
        .data(r#"mutation { addPlayer(name: "Carl") { player { id } } }"#)
        .await;
    assert_eq!(added["addPlayer"]["player"]["id"], "2");

    let players = setup.data(r#"{ players { id name } }"#).await;
    assert_eq!(
        players["players"],
        json!([{ "id": "2", "name": "Bob" }, { "id": "2", "name": "Carl" }])
    );
}

#[tokio::test]
async fn malformed_ids_behave_as_not_found() {
    let setup = TestSetupBuilder::new()
        .with_player(1, "Alice", vec![])
        .build();

    let data = setup
        .data(
            r#"mutation {
                deletePlayer(id: "abc") { success }
                deleteGame(playerId: "abc", date: "2024-01-01", opponent: "Bob") { success }
            }"#,
        )
        .await;
    assert_eq!(data["deletePlayer"]["success"], false);
    assert_eq!(data["deleteGame"]["success"], false);

    let player = setup.data(r#"{ player(id: "abc") { name } }"#).await;
    assert_eq!(player["player"], serde_json::Value::Null);
}

#[tokio::test]
async fn invalid_document_returns_bad_request() {
    let setup = TestSetupBuilder::new().build();

    let (status, body) = setup.graphql(r#"{ player { name } }"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
}
