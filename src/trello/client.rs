//! Trello API gateway.
//!
//! One method per remote operation. Every request carries the `key` /
//! `token` credential pair as query parameters; every response is run
//! through the entity codec.

use reqwest::{Client, Method, Response, Url};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::trello::codec::{Entity, decode, decode_many};
use crate::trello::error::{TrelloError, TrelloResult};
use crate::trello::models::{
    Board, Card, CheckItem, Checklist, Comment, CustomField, CustomFieldItem, Label, List,
};
use crate::trello::params::{
    BoardUpdate, CardUpdate, CheckItemUpdate, ListUpdate, NewCard, QueryParams,
};

/// Authenticated client for the Trello REST API.
///
/// Cheap to clone; clones share one connection pool. Credentials and base
/// URL are fixed at construction.
#[derive(Clone)]
pub struct TrelloClient {
    base_url: String,
    base: Url,
    api_key: String,
    token: String,
    client: Client,
}

impl TrelloClient {
    /// Build a client from settings, with the configured per-request timeout.
    pub fn new(settings: &Settings) -> TrelloResult<Self> {
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = settings.base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url).map_err(|e| {
            TrelloError::validation(format!("Invalid base URL '{}': {}", base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(TrelloError::validation(format!(
                "Invalid base URL '{}': cannot carry a path",
                base_url
            )));
        }

        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            base_url,
            base,
            api_key: settings.api_key.clone(),
            token: settings.token.clone(),
            client,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append `segments` to the base URL, percent-encoding each one so an id
    /// can never add path levels or a query string.
    fn url(&self, segments: &[&str]) -> TrelloResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(TrelloError::validation(format!(
                "Invalid path segment '{}' in /{}",
                bad,
                segments.join("/")
            )));
        }

        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn execute(
        &self,
        method: Method,
        segments: &[&str],
        params: &QueryParams,
        body: Option<&Value>,
    ) -> TrelloResult<Response> {
        let url = self.url(segments)?;
        let path = url.path().to_string();
        debug!(%method, path = %path, params = params.pairs().len(), "Trello request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .query(&[("key", self.api_key.as_str()), ("token", self.token.as_str())])
            .query(params.pairs());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(%method, path = %path, status = status.as_u16(), "Trello rejected request");
        Err(TrelloError::RemoteRequest {
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch_value(
        &self,
        method: Method,
        segments: &[&str],
        params: &QueryParams,
        body: Option<&Value>,
    ) -> TrelloResult<Value> {
        let response = self.execute(method, segments, params, body).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            TrelloError::validation(format!(
                "Trello returned a non-JSON body for /{}: {}",
                segments.join("/"),
                e
            ))
        })
    }

    async fn get_one<T: Entity>(&self, segments: &[&str], params: &QueryParams) -> TrelloResult<T> {
        decode(self.fetch_value(Method::GET, segments, params, None).await?)
    }

    async fn get_many<T: Entity>(
        &self,
        segments: &[&str],
        params: &QueryParams,
    ) -> TrelloResult<Vec<T>> {
        decode_many(self.fetch_value(Method::GET, segments, params, None).await?)
    }

    async fn post<T: Entity>(&self, segments: &[&str], params: &QueryParams) -> TrelloResult<T> {
        decode(self.fetch_value(Method::POST, segments, params, None).await?)
    }

    async fn put<T: Entity>(&self, segments: &[&str], params: &QueryParams) -> TrelloResult<T> {
        decode(self.fetch_value(Method::PUT, segments, params, None).await?)
    }

    async fn put_json<T: Entity>(&self, segments: &[&str], body: &Value) -> TrelloResult<T> {
        decode(
            self.fetch_value(Method::PUT, segments, &QueryParams::new(), Some(body))
                .await?,
        )
    }

    /// Side-effect-only request; the response body is not inspected.
    async fn send_void(
        &self,
        method: Method,
        segments: &[&str],
        params: &QueryParams,
    ) -> TrelloResult<()> {
        self.execute(method, segments, params, None).await?;
        Ok(())
    }

    // =========================================================================
    // Boards
    // =========================================================================

    pub async fn list_boards(&self) -> TrelloResult<Vec<Board>> {
        let params = QueryParams::new().set("fields", "name,desc,url,closed");
        self.get_many(&["members", "me", "boards"], &params).await
    }

    pub async fn get_board(&self, board_id: &str) -> TrelloResult<Board> {
        self.get_one(&["boards", board_id], &QueryParams::new())
            .await
    }

    /// Boards whose name contains `query`, case-insensitively, in the order
    /// Trello returned them.
    pub async fn search_boards(&self, query: &str) -> TrelloResult<Vec<Board>> {
        let needle = query.to_lowercase();
        let boards = self.list_boards().await?;
        Ok(boards
            .into_iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .collect())
    }

    pub async fn update_board(&self, board_id: &str, update: &BoardUpdate) -> TrelloResult<Board> {
        self.put(&["boards", board_id], &update.to_params())
            .await
    }

    pub async fn archive_board(&self, board_id: &str) -> TrelloResult<Board> {
        self.update_board(board_id, &BoardUpdate::archive()).await
    }

    // =========================================================================
    // Lists
    // =========================================================================

    pub async fn list_lists(&self, board_id: &str) -> TrelloResult<Vec<List>> {
        self.get_many(&["boards", board_id, "lists"], &QueryParams::new())
            .await
    }

    pub async fn create_list(&self, board_id: &str, name: &str) -> TrelloResult<List> {
        let params = QueryParams::new()
            .set("name", name)
            .set("idBoard", board_id);
        self.post(&["lists"], &params).await
    }

    pub async fn update_list(&self, list_id: &str, update: &ListUpdate) -> TrelloResult<List> {
        self.put(&["lists", list_id], &update.to_params())
            .await
    }

    pub async fn archive_list(&self, list_id: &str) -> TrelloResult<List> {
        self.update_list(list_id, &ListUpdate::archive()).await
    }

    // =========================================================================
    // Cards
    // =========================================================================

    pub async fn list_cards(&self, list_id: &str) -> TrelloResult<Vec<Card>> {
        self.get_many(&["lists", list_id, "cards"], &QueryParams::new())
            .await
    }

    pub async fn get_board_cards(&self, board_id: &str) -> TrelloResult<Vec<Card>> {
        self.get_many(&["boards", board_id, "cards"], &QueryParams::new())
            .await
    }

    pub async fn get_card(&self, card_id: &str) -> TrelloResult<Card> {
        self.get_one(&["cards", card_id], &QueryParams::new())
            .await
    }

    pub async fn create_card(&self, card: &NewCard) -> TrelloResult<Card> {
        self.post(&["cards"], &card.to_params()).await
    }

    pub async fn update_card(&self, card_id: &str, update: &CardUpdate) -> TrelloResult<Card> {
        self.put(&["cards", card_id], &update.to_params())
            .await
    }

    pub async fn move_card(&self, card_id: &str, list_id: &str) -> TrelloResult<Card> {
        self.update_card(card_id, &CardUpdate::move_to(list_id))
            .await
    }

    pub async fn archive_card(&self, card_id: &str) -> TrelloResult<Card> {
        self.update_card(card_id, &CardUpdate::archive()).await
    }

    pub async fn set_due_date(&self, card_id: &str, due: &str) -> TrelloResult<Card> {
        self.update_card(card_id, &CardUpdate::due(due)).await
    }

    pub async fn mark_due_complete(&self, card_id: &str, complete: bool) -> TrelloResult<Card> {
        self.update_card(card_id, &CardUpdate::due_complete(complete))
            .await
    }

    pub async fn add_comment(&self, card_id: &str, text: &str) -> TrelloResult<Comment> {
        let params = QueryParams::new().set("text", text);
        self.post(&["cards", card_id, "actions", "comments"], &params)
            .await
    }

    // =========================================================================
    // Checklists
    // =========================================================================

    pub async fn get_checklists(&self, card_id: &str) -> TrelloResult<Vec<Checklist>> {
        self.get_many(&["cards", card_id, "checklists"], &QueryParams::new())
            .await
    }

    pub async fn create_checklist(&self, card_id: &str, name: &str) -> TrelloResult<Checklist> {
        let params = QueryParams::new().set("name", name);
        self.post(&["cards", card_id, "checklists"], &params)
            .await
    }

    pub async fn delete_checklist(&self, checklist_id: &str) -> TrelloResult<()> {
        self.send_void(
            Method::DELETE,
            &["checklists", checklist_id],
            &QueryParams::new(),
        )
        .await
    }

    pub async fn add_check_item(
        &self,
        checklist_id: &str,
        name: &str,
        checked: Option<bool>,
    ) -> TrelloResult<CheckItem> {
        let params = QueryParams::new()
            .set("name", name)
            .set_opt("checked", checked);
        self.post(&["checklists", checklist_id, "checkItems"], &params)
            .await
    }

    pub async fn update_check_item(
        &self,
        card_id: &str,
        checklist_id: &str,
        check_item_id: &str,
        update: &CheckItemUpdate,
    ) -> TrelloResult<CheckItem> {
        let segments = [
            "cards",
            card_id,
            "checklist",
            checklist_id,
            "checkItem",
            check_item_id,
        ];
        self.put(&segments, &update.to_params()).await
    }

    pub async fn delete_check_item(
        &self,
        checklist_id: &str,
        check_item_id: &str,
    ) -> TrelloResult<()> {
        self.send_void(
            Method::DELETE,
            &["checklists", checklist_id, "checkItems", check_item_id],
            &QueryParams::new(),
        )
        .await
    }

    // =========================================================================
    // Labels
    // =========================================================================

    pub async fn get_board_labels(&self, board_id: &str) -> TrelloResult<Vec<Label>> {
        self.get_many(&["boards", board_id, "labels"], &QueryParams::new())
            .await
    }

    pub async fn create_label(
        &self,
        board_id: &str,
        name: &str,
        color: Option<&str>,
    ) -> TrelloResult<Label> {
        let params = QueryParams::new()
            .set("idBoard", board_id)
            .set("name", name)
            .set_opt("color", color);
        self.post(&["labels"], &params).await
    }

    pub async fn add_label_to_card(&self, card_id: &str, label_id: &str) -> TrelloResult<()> {
        let params = QueryParams::new().set("value", label_id);
        self.send_void(
            Method::POST,
            &["cards", card_id, "idLabels"],
            &params,
        )
        .await
    }

    pub async fn remove_label_from_card(&self, card_id: &str, label_id: &str) -> TrelloResult<()> {
        self.send_void(
            Method::DELETE,
            &["cards", card_id, "idLabels", label_id],
            &QueryParams::new(),
        )
        .await
    }

    // =========================================================================
    // Custom fields
    // =========================================================================

    pub async fn get_custom_fields(&self, board_id: &str) -> TrelloResult<Vec<CustomField>> {
        self.get_many(&["boards", board_id, "customFields"], &QueryParams::new())
            .await
    }

    /// Set a card's custom field value. The value is an object such as
    /// `{"number": "5"}` or `{"text": "..."}`, so it travels as a JSON body.
    pub async fn set_card_custom_field(
        &self,
        card_id: &str,
        field_id: &str,
        value: &Value,
    ) -> TrelloResult<CustomFieldItem> {
        let body = json!({ "value": value });
        self.put_json(&["cards", card_id, "customField", field_id, "item"], &body)
            .await
    }
}
