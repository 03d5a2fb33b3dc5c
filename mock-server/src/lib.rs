//! In-memory stand-in for the subset of the Pinboard v1 API the client uses.
//!
//! Serves a single account. `/v1/user/api_token/` authenticates with HTTP
//! Basic credentials; every other route expects the
//! `auth_token=<username>:<token>` query parameter. An optional call budget
//! makes the posts routes answer 429 once it is spent.

use std::{
    collections::{hash_map::DefaultHasher, HashMap},
    hash::{Hash, Hasher},
    sync::Arc,
};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Account {
    pub fn new(username: &str, password: &str, token: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            token: token.to_string(),
        }
    }

    fn auth_token(&self) -> String {
        format!("{}:{}", self.username, self.token)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new("demo", "demo", "0123456789ABCDEF")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub href: String,
    pub description: String,
    pub extended: String,
    pub meta: String,
    pub hash: String,
    pub time: String,
    pub shared: String,
    pub toread: String,
    pub tags: String,
}

#[derive(Default)]
struct Store {
    posts: Vec<Post>,
    calls: u32,
}

#[derive(Clone)]
pub struct AppState {
    account: Arc<Account>,
    rate_limit: Option<u32>,
    store: Arc<RwLock<Store>>,
}

type Params = Query<HashMap<String, String>>;

pub fn app(account: Account) -> Router {
    app_with_rate_limit(account, None)
}

/// Like [`app`], but the posts routes answer 429 after `limit` successful
/// authenticated calls.
pub fn app_with_rate_limit(account: Account, limit: Option<u32>) -> Router {
    let state = AppState {
        account: Arc::new(account),
        rate_limit: limit,
        store: Arc::new(RwLock::new(Store::default())),
    };
    Router::new()
        .route("/v1/user/api_token/", get(api_token))
        .route("/v1/posts/all", get(all_posts))
        .route("/v1/posts/add", get(add_post))
        .route("/v1/posts/delete", get(delete_post))
        .with_state(state)
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn api_token(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    let credentials = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_basic);
    match credentials {
        Some((user, password)) if user == state.account.username && password == state.account.password => {
            Ok(Json(json!({ "result": state.account.token })))
        }
        _ => {
            warn!("api_token: bad credentials");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

async fn all_posts(State(state): State<AppState>, Query(params): Params) -> Result<Json<Vec<Post>>, StatusCode> {
    admit(&state, &params).await?;
    let store = state.store.read().await;
    let tag = params.get("tag");
    let limit = params
        .get("results")
        .and_then(|r| r.parse::<usize>().ok())
        .unwrap_or(usize::MAX);
    let posts = store
        .posts
        .iter()
        .filter(|p| tag.map_or(true, |t| p.tags.split_whitespace().any(|pt| pt == t.as_str())))
        .take(limit)
        .cloned()
        .collect();
    Ok(Json(posts))
}

async fn add_post(State(state): State<AppState>, Query(params): Params) -> Result<Json<Value>, StatusCode> {
    admit(&state, &params).await?;
    let Some(href) = params.get("url").filter(|u| !u.is_empty()) else {
        return Ok(result_code("missing url"));
    };
    let Some(description) = params.get("description") else {
        return Ok(result_code("missing description"));
    };

    let mut store = state.store.write().await;
    let existing = store.posts.iter().position(|p| &p.href == href);
    if existing.is_some() && params.get("replace").is_some_and(|r| r == "no") {
        return Ok(result_code("item already exists"));
    }
    if let Some(idx) = existing {
        store.posts.remove(idx);
    }

    let field = |name: &str, default: &str| params.get(name).cloned().unwrap_or_else(|| default.to_string());
    let post = Post {
        href: href.clone(),
        description: description.clone(),
        extended: field("extended", ""),
        meta: url_hash(&format!("{href}{description}")),
        hash: url_hash(href),
        time: field("dt", &chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()),
        shared: field("shared", "yes"),
        toread: field("toread", "no"),
        tags: field("tags", ""),
    };
    info!(href = %post.href, "bookmark added");
    store.posts.insert(0, post);
    Ok(result_code("done"))
}

async fn delete_post(State(state): State<AppState>, Query(params): Params) -> Result<Json<Value>, StatusCode> {
    admit(&state, &params).await?;
    let href = params.get("url").map(String::as_str).unwrap_or_default();
    let mut store = state.store.write().await;
    match store.posts.iter().position(|p| p.href == href) {
        Some(idx) => {
            store.posts.remove(idx);
            info!(href, "bookmark deleted");
            Ok(result_code("done"))
        }
        None => Ok(result_code("item not found")),
    }
}

/// Check the `auth_token` parameter and charge one call against the budget.
async fn admit(state: &AppState, params: &HashMap<String, String>) -> Result<(), StatusCode> {
    if params.get("auth_token") != Some(&state.account.auth_token()) {
        warn!("rejected request with bad auth_token");
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut store = state.store.write().await;
    if state.rate_limit.is_some_and(|limit| store.calls >= limit) {
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }
    store.calls += 1;
    Ok(())
}

fn parse_basic(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

fn result_code(code: &str) -> Json<Value> {
    Json(json!({ "result_code": code }))
}

fn url_hash(s: &str) -> String {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
