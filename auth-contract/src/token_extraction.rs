use std::fmt;

use axum::body::{to_bytes, Body};
use axum::extract::{FromRequestParts, Query, Request};
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use serde::Deserialize;

// Upper bound on a form body buffered while looking for a token field.
const FORM_BODY_LIMIT: usize = 64 * 1024;

// Number of token characters that may appear in logs.
const LOGGED_PREFIX_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Header,
    Query,
    Form,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Header => write!(f, "Authorization header"),
            TokenSource::Query => write!(f, "query"),
            TokenSource::Form => write!(f, "form"),
        }
    }
}

/// A bearer token pulled out of an inbound request.
///
/// `Debug` only ever shows the short prefix, so the value can sit inside
/// structs that get logged.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtractedToken {
    pub value: String,
    pub source: TokenSource,
}

impl ExtractedToken {
    pub fn new(value: String, source: TokenSource) -> Self {
        Self { value, source }
    }

    pub fn prefix(&self) -> String {
        token_prefix(&self.value)
    }
}

impl fmt::Debug for ExtractedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractedToken")
            .field("value", &format_args!("{}...", self.prefix()))
            .field("source", &self.source)
            .finish()
    }
}

/// First few characters of a token, for log correlation only.
pub fn token_prefix(token: &str) -> String {
    token.chars().take(LOGGED_PREFIX_LEN).collect()
}

#[derive(Deserialize)]
struct TokenParams {
    token: Option<String>,
}

/// Pulls the caller's token out of `request`.
///
/// Sources are tried in order: `Authorization: Bearer`, the `token` query
/// parameter, then the `token` field of a urlencoded form body. The first
/// non-empty value wins.
///
/// A form body is only read when its `Content-Length` is known and within
/// `FORM_BODY_LIMIT`; it is then put back, so the returned request can be
/// handed on unchanged. Larger or unsized bodies are passed through unread.
/// If reading a sized body fails mid-stream, it is replaced by an empty one.
pub async fn extract_token(request: Request) -> (Request, Option<ExtractedToken>) {
    let (mut parts, body) = request.into_parts();

    if let Some(value) = bearer_token(&mut parts).await {
        let token = ExtractedToken::new(value, TokenSource::Header);
        return (Request::from_parts(parts, body), Some(token));
    }

    if let Some(value) = query_token(&parts) {
        let token = ExtractedToken::new(value, TokenSource::Query);
        return (Request::from_parts(parts, body), Some(token));
    }

    if !is_form(&parts.headers) || !fits_form_limit(&parts.headers) {
        return (Request::from_parts(parts, body), None);
    }

    let bytes = match to_bytes(body, FORM_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => return (Request::from_parts(parts, Body::empty()), None),
    };

    let token = serde_urlencoded::from_bytes::<TokenParams>(&bytes)
        .ok()
        .and_then(|params| non_empty(params.token))
        .map(|value| ExtractedToken::new(value, TokenSource::Form));

    (Request::from_parts(parts, Body::from(bytes)), token)
}

async fn bearer_token(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, &())
            .await
            .ok()?;
    non_empty(Some(bearer.token().to_owned()))
}

fn query_token(parts: &Parts) -> Option<String> {
    let Query(params) = Query::<TokenParams>::try_from_uri(&parts.uri).ok()?;
    non_empty(params.token)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

fn fits_form_limit(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .map(|len| len <= FORM_BODY_LIMIT)
        .unwrap_or(false)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
