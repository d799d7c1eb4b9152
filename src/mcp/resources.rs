//! Static Trello API documentation exposed as MCP resources.
//!
//! The markdown lives under `docs/` and is embedded at build time. Each
//! document is addressed as `trello://docs/{slug}`.

use rmcp::{
    ErrorData as McpError,
    model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents},
};
use rust_embed::RustEmbed;
use serde_json::json;

pub const URI_PREFIX: &str = "trello://docs/";
pub const MIME_TYPE: &str = "text/markdown";

#[derive(RustEmbed)]
#[folder = "docs/"]
#[include = "*.md"]
struct DocAssets;

/// One entry of the documentation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl DocEntry {
    pub fn uri(&self) -> String {
        format!("{}{}", URI_PREFIX, self.slug)
    }

    /// Markdown text of the document.
    pub fn content(&self) -> Option<String> {
        DocAssets::get(&format!("{}.md", self.slug))
            .map(|file| String::from_utf8_lossy(&file.data).into_owned())
    }
}

pub const CATALOG: &[DocEntry] = &[
    DocEntry {
        slug: "api-introduction",
        title: "Trello API Introduction",
        description: "Base URL, request conventions and the board/list/card hierarchy",
    },
    DocEntry {
        slug: "object-definitions",
        title: "Object Definitions",
        description: "Fields of boards, lists, cards, checklists, labels and custom fields",
    },
    DocEntry {
        slug: "rate-limits",
        title: "Rate Limits",
        description: "Per-key and per-token request limits and how 429 responses look",
    },
    DocEntry {
        slug: "status-codes",
        title: "Status Codes",
        description: "HTTP status codes returned by the Trello API and what they mean",
    },
    DocEntry {
        slug: "authorization",
        title: "Authorization",
        description: "API keys, tokens, scopes and expiration",
    },
    DocEntry {
        slug: "limits",
        title: "Object Limits",
        description: "Maximum numbers of boards, lists, cards, checklists and labels",
    },
    DocEntry {
        slug: "nested-resources",
        title: "Nested Resources",
        description: "Fetching related objects in one request and the fields parameter",
    },
    DocEntry {
        slug: "custom-fields",
        title: "Custom Fields",
        description: "Custom field types and the value shapes used to set them on cards",
    },
];

/// Look up a catalog entry by full URI.
pub fn find(uri: &str) -> Option<&'static DocEntry> {
    let slug = uri.strip_prefix(URI_PREFIX)?;
    find_slug(slug)
}

pub fn find_slug(slug: &str) -> Option<&'static DocEntry> {
    CATALOG.iter().find(|entry| entry.slug == slug)
}

/// Catalog entries as MCP resource descriptors.
pub fn list() -> Vec<Resource> {
    CATALOG
        .iter()
        .map(|entry| {
            let mut resource = RawResource::new(entry.uri(), entry.title);
            resource.description = Some(entry.description.to_string());
            resource.mime_type = Some(MIME_TYPE.to_string());
            resource.no_annotation()
        })
        .collect()
}

/// Read one document by URI, returned verbatim.
pub fn read(uri: &str) -> Result<ReadResourceResult, McpError> {
    let text = find(uri).and_then(DocEntry::content).ok_or_else(|| {
        McpError::resource_not_found(
            format!("Unknown resource: {}", uri),
            Some(json!({ "uri": uri })),
        )
    })?;

    Ok(ReadResourceResult::new(vec![ResourceContents::text(
        text, uri,
    )]))
}
