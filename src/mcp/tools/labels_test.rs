//! Tests for label MCP tools

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode, RawContent};
use serde_json::{Value, json};

use crate::mcp::server::TrelloServer;
use crate::mcp::tools::labels::{CardLabelParams, CreateLabelParams, GetBoardLabelsParams};
use crate::trello::mock_server::MockTrello;

fn content_json(result: &CallToolResult) -> Value {
    let content_text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    serde_json::from_str(content_text).unwrap()
}

fn card_label() -> CardLabelParams {
    CardLabelParams {
        card_id: "c1".to_string(),
        label_id: "lab1".to_string(),
    }
}

#[tokio::test]
async fn test_get_board_labels_keeps_unnamed_and_colorless() {
    let mock = MockTrello::start().await;
    mock.respond(
        "GET",
        "/boards/b1/labels",
        200,
        json!([
            {"id": "lab1", "name": "Bug", "color": "red", "idBoard": "b1"},
            {"id": "lab2", "name": "", "color": null, "idBoard": "b1"}
        ]),
    );
    let server = TrelloServer::new(mock.client());

    let result = server
        .get_board_labels(Parameters(GetBoardLabelsParams {
            board_id: "b1".to_string(),
        }))
        .await
        .unwrap();

    let json = content_json(&result);
    assert_eq!(json[0]["color"], "red");
    assert_eq!(json[1]["name"], "");
    assert_eq!(json[1]["color"], Value::Null);
    assert_eq!(json[1]["board_id"], "b1");
}

#[tokio::test]
async fn test_create_label_with_color() {
    let mock = MockTrello::start().await;
    mock.respond(
        "POST",
        "/labels",
        200,
        json!({"id": "lab3", "name": "Urgent", "color": "orange", "idBoard": "b1"}),
    );
    let server = TrelloServer::new(mock.client());

    let result = server
        .create_label(Parameters(CreateLabelParams {
            board_id: "b1".to_string(),
            name: "Urgent".to_string(),
            color: Some("orange".to_string()),
        }))
        .await
        .unwrap();

    assert_eq!(content_json(&result)["id"], "lab3");
    let request = mock.last_request();
    assert_eq!(request.param("idBoard"), Some("b1"));
    assert_eq!(request.param("name"), Some("Urgent"));
    assert_eq!(request.param("color"), Some("orange"));
}

#[tokio::test]
async fn test_create_label_blank_color_is_not_sent() {
    let mock = MockTrello::start().await;
    mock.respond(
        "POST",
        "/labels",
        200,
        json!({"id": "lab4", "name": "Plain", "color": null, "idBoard": "b1"}),
    );
    let server = TrelloServer::new(mock.client());

    server
        .create_label(Parameters(CreateLabelParams {
            board_id: "b1".to_string(),
            name: "Plain".to_string(),
            color: Some("  ".to_string()),
        }))
        .await
        .unwrap();

    assert_eq!(mock.last_request().param("color"), None);
}

#[tokio::test]
async fn test_add_label_to_card() {
    let mock = MockTrello::start().await;
    mock.respond("POST", "/cards/c1/idLabels", 200, json!(["lab1"]));
    let server = TrelloServer::new(mock.client());

    let result = server
        .add_label_to_card(Parameters(card_label()))
        .await
        .unwrap();

    assert_eq!(content_json(&result), json!({"added": true}));
    assert_eq!(mock.last_request().param("value"), Some("lab1"));
}

#[tokio::test]
async fn test_remove_label_from_card() {
    let mock = MockTrello::start().await;
    mock.respond("DELETE", "/cards/c1/idLabels/lab1", 200, json!([]));
    let server = TrelloServer::new(mock.client());

    let result = server
        .remove_label_from_card(Parameters(card_label()))
        .await
        .unwrap();

    assert_eq!(content_json(&result), json!({"removed": true}));
    assert_eq!(mock.last_request().method, "DELETE");
}

#[tokio::test]
async fn test_label_ids_must_not_be_blank() {
    let mock = MockTrello::start().await;
    let server = TrelloServer::new(mock.client());

    let err = server
        .add_label_to_card(Parameters(CardLabelParams {
            card_id: "c1".to_string(),
            label_id: "".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(mock.requests().is_empty());
}
