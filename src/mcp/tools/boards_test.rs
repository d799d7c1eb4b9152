//! Tests for board MCP tools

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode, RawContent};
use serde_json::{Value, json};

use crate::mcp::server::TrelloServer;
use crate::mcp::tools::boards::{ArchiveBoardParams, GetBoardParams, SearchBoardParams};
use crate::trello::mock_server::MockTrello;

fn content_json(result: &CallToolResult) -> Value {
    let content_text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    serde_json::from_str(content_text).unwrap()
}

fn boards() -> Value {
    json!([
        {"id": "b1", "name": "Project Alpha", "desc": "Main", "url": "https://trello.com/b/b1", "closed": false},
        {"id": "b2", "name": "Beta Tasks", "desc": "", "url": "https://trello.com/b/b2", "closed": false},
        {"id": "b3", "name": "alphabet soup", "desc": "", "url": "https://trello.com/b/b3", "closed": true}
    ])
}

#[tokio::test]
async fn test_list_boards_returns_canonical_fields() {
    let mock = MockTrello::start().await;
    mock.respond("GET", "/members/me/boards", 200, boards());
    let server = TrelloServer::new(mock.client());

    let result = server.list_boards().await.expect("list_boards should succeed");

    assert_ne!(result.is_error, Some(true));
    let json = content_json(&result);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "b1");
    assert_eq!(items[0]["description"], "Main");
    assert!(items[0].get("desc").is_none());
    assert_eq!(items[2]["closed"], true);
}

#[tokio::test]
async fn test_get_board() {
    let mock = MockTrello::start().await;
    mock.respond(
        "GET",
        "/boards/b1",
        200,
        json!({"id": "b1", "name": "Project Alpha"}),
    );
    let server = TrelloServer::new(mock.client());

    let result = server
        .get_board(Parameters(GetBoardParams {
            board_id: "b1".to_string(),
        }))
        .await
        .unwrap();

    let json = content_json(&result);
    assert_eq!(json["name"], "Project Alpha");
    assert_eq!(json["description"], "");
    assert_eq!(json["closed"], false);
}

#[tokio::test]
async fn test_search_board_is_case_insensitive_and_ordered() {
    let mock = MockTrello::start().await;
    mock.respond("GET", "/members/me/boards", 200, boards());
    let server = TrelloServer::new(mock.client());

    let result = server
        .search_board(Parameters(SearchBoardParams {
            query: "ALPHA".to_string(),
        }))
        .await
        .unwrap();

    let json = content_json(&result);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["b1", "b3"]);
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn test_search_board_no_match_is_empty() {
    let mock = MockTrello::start().await;
    mock.respond("GET", "/members/me/boards", 200, boards());
    let server = TrelloServer::new(mock.client());

    let result = server
        .search_board(Parameters(SearchBoardParams {
            query: "gamma".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(content_json(&result), json!([]));
}

#[tokio::test]
async fn test_archive_board_sends_only_closed() {
    let mock = MockTrello::start().await;
    mock.respond(
        "PUT",
        "/boards/b1",
        200,
        json!({"id": "b1", "name": "Project Alpha", "closed": true}),
    );
    let server = TrelloServer::new(mock.client());

    let result = server
        .archive_board(Parameters(ArchiveBoardParams {
            board_id: "b1".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(content_json(&result)["closed"], true);
    let request = mock.last_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.operation_params(), vec![("closed", "true")]);
}

#[tokio::test]
async fn test_blank_board_id_is_rejected_without_request() {
    let mock = MockTrello::start().await;
    let server = TrelloServer::new(mock.client());

    let err = server
        .get_board(Parameters(GetBoardParams {
            board_id: "  ".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("board_id"));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_remote_failure_becomes_error_result() {
    let mock = MockTrello::start().await;
    mock.respond(
        "GET",
        "/members/me/boards",
        401,
        json!({"message": "invalid token"}),
    );
    let server = TrelloServer::new(mock.client());

    let result = server
        .list_boards()
        .await
        .expect("remote failures are reported as tool results");

    assert_eq!(result.is_error, Some(true));
    let json = content_json(&result);
    assert_eq!(json["kind"], "remote_request");
    assert_eq!(json["status"], 401);
    assert!(json["error"].as_str().unwrap().contains("invalid token"));
}

#[tokio::test]
async fn test_malformed_remote_body_becomes_error_result() {
    let mock = MockTrello::start().await;
    mock.respond("GET", "/members/me/boards", 200, json!({"unexpected": true}));
    let server = TrelloServer::new(mock.client());

    let result = server
        .list_boards()
        .await
        .expect("a bad response is not a bad argument");

    assert_eq!(result.is_error, Some(true));
    let json = content_json(&result);
    assert_eq!(json["kind"], "invalid_response");
    assert!(json.get("status").is_none());
}
