//! Request/response shaping for the author topic graph panel.
//!
//! Transport is the caller's concern; this module builds the `POST /author_graphs` body and maps
//! whatever came back onto what the panel shows.

use crate::foundation::error::WaveResult;

/// Endpoint path the request body is posted to.
pub const AUTHOR_GRAPHS_PATH: &str = "/author_graphs";

/// Which author graph to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Every topic of the author.
    #[default]
    Full,
    /// The author's five strongest topics.
    Top5,
}

impl GraphKind {
    /// Human title prefix.
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "All Topics",
            Self::Top5 => "Top 5 Topics",
        }
    }

    /// CSS class of the graph container (`full-graph` / `top5-graph`).
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Full => "full-graph",
            Self::Top5 => "top5-graph",
        }
    }
}

/// JSON body of the graph request.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthorGraphRequest {
    /// Selected author.
    pub author: String,
    /// Requested graph.
    pub graph_type: GraphKind,
}

impl AuthorGraphRequest {
    /// Body for `author` sent as given, or `None` when no author is selected.
    pub fn new(author: &str, graph_type: GraphKind) -> Option<Self> {
        if author.is_empty() {
            return None;
        }
        Some(Self {
            author: author.to_owned(),
            graph_type,
        })
    }

    /// Serialized body.
    pub fn to_json(&self) -> WaveResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// JSON body of the graph response.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthorGraphResponse {
    /// Base64 PNG, absent or empty when the server produced nothing.
    #[serde(default)]
    pub img: Option<String>,
}

/// `All Topics for <author>` / `Top 5 Topics for <author>`.
pub fn graph_title(kind: GraphKind, author: &str) -> String {
    format!("{} for {author}", kind.label())
}

/// `data:` URI for a base64 PNG payload.
pub fn image_data_uri(img_base64: &str) -> String {
    format!("data:image/png;base64,{img_base64}")
}

/// What the graph container ends up showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphOutcome {
    /// No author selected; nothing was requested.
    MissingAuthor,
    /// A rendered graph.
    Graph {
        /// Title above the image.
        title: String,
        /// Container CSS class.
        css_class: &'static str,
        /// Image source.
        data_uri: String,
    },
    /// The server answered without an image.
    NoData,
    /// Transport failure, non-success status or undecodable body.
    Failed,
}

impl GraphOutcome {
    /// Map a raw exchange onto the panel state.
    ///
    /// `status` is the HTTP status and `body` the response text; anything outside `2xx` or a body
    /// that does not decode is [`GraphOutcome::Failed`].
    pub fn from_response(request: &AuthorGraphRequest, status: u16, body: &str) -> Self {
        if !(200..300).contains(&status) {
            tracing::warn!(status, author = %request.author, "author graph request failed");
            return Self::Failed;
        }
        let resp: AuthorGraphResponse = match serde_json::from_str(body) {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(%err, "author graph response is not valid JSON");
                return Self::Failed;
            }
        };
        match resp.img.filter(|img| !img.is_empty()) {
            Some(img) => Self::Graph {
                title: graph_title(request.graph_type, &request.author),
                css_class: request.graph_type.css_class(),
                data_uri: image_data_uri(&img),
            },
            None => Self::NoData,
        }
    }

    /// Status line shown in the container for non-graph states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::MissingAuthor => Some("Please select an author."),
            Self::Graph { .. } => None,
            Self::NoData => Some("No graph data received from server."),
            Self::Failed => Some("Error loading graph. Please try again."),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/author_graph.rs"]
mod tests;
