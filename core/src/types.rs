//! Domain DTOs for the Pinboard v1 API.
//!
//! # Design
//! These mirror the JSON the service returns for `format=json`. They are
//! defined independently of the mock-server crate; the end-to-end test
//! catches schema drift between the two.

use serde::{Deserialize, Serialize};

/// One bookmark as returned by `/posts/all`.
///
/// Pinboard encodes booleans as `"yes"`/`"no"` strings and tags as a single
/// space-separated string; both are kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub href: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub extended: String,
    #[serde(default)]
    pub meta: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub shared: String,
    #[serde(default)]
    pub toread: String,
    #[serde(default)]
    pub tags: String,
}

impl Post {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.split_whitespace().collect()
    }
}

/// Body of `/posts/add` and `/posts/delete`.
///
/// The API answers 200 even when the operation did nothing, e.g.
/// `"item not found"` on delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultCode {
    pub result_code: String,
}

impl ResultCode {
    pub const DONE: &'static str = "done";

    pub fn is_done(&self) -> bool {
        self.result_code == Self::DONE
    }
}

/// Body of `/user/api_token/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiToken {
    pub result: String,
}

/// Status and decoded JSON body of a generic request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub payload: serde_json::Value,
}
