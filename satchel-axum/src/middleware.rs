//! Session middleware for axum

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};
use satchel_core::{SessionHandle, SessionId, SessionStore};

/// Session layer state
///
/// Mount it with [`axum::middleware::from_fn`], adding the `Extension` layer
/// after the middleware so it wraps it:
///
/// ```no_run
/// use std::sync::Arc;
///
/// use axum::{Extension, Router, middleware};
/// use satchel_axum::{SessionLayer, session_middleware};
/// use satchel_core::{DEFAULT_COOKIE_NAME, MemoryStore};
///
/// let store = Arc::new(MemoryStore::default());
/// let app: Router = Router::new()
///     .layer(middleware::from_fn(session_middleware))
///     .layer(Extension(SessionLayer::new(store, DEFAULT_COOKIE_NAME)));
/// ```
#[derive(Clone)]
pub struct SessionLayer {
    store: Arc<dyn SessionStore>,
    cookie_name: String,
}

impl SessionLayer {
    /// Create a layer that persists sessions through the given store.
    pub fn new(store: Arc<dyn SessionStore>, cookie_name: impl Into<String>) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

/// Extract the session identifier from the request's cookies.
///
/// A malformed identifier counts as absent, so stale or foreign cookies
/// degrade to a fresh session rather than an error.
fn extract_session_id(request: &Request, cookie_name: &str) -> Option<SessionId> {
    if let Some(cookie_header) = request.headers().get(header::COOKIE) {
        if let Ok(cookies) = cookie_header.to_str() {
            for cookie in cookies.split(';') {
                let cookie = cookie.trim();
                if let Some(value) = cookie.strip_prefix(&format!("{}=", cookie_name)) {
                    match value.parse() {
                        Ok(id) => return Some(id),
                        Err(e) => {
                            tracing::debug!(error = %e, "ignoring malformed session cookie");
                            return None;
                        }
                    }
                }
            }
        }
    }

    None
}

/// Session middleware function
///
/// Loads the session named by the request's cookie (or a fresh one), binds a
/// [`SessionHandle`] into the request extensions for handlers to extract,
/// and after the handler returns saves the session and re-issues the
/// identifier cookie. The cookie is set on every response that passed
/// through here, whether or not the session's data changed.
pub async fn session_middleware(
    axum::Extension(layer): axum::Extension<SessionLayer>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let id = extract_session_id(&request, &layer.cookie_name);

    let session = match layer.store.load(id).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "session load failed");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let handle = SessionHandle::new(session);
    request.extensions_mut().insert(handle.clone());

    let mut response = next.run(request).await;

    // Persist whatever state the handler left behind. A failed save is
    // logged and the response still goes out; the client just loses the
    // session on its next request.
    let mut session = handle.lock().await;
    if let Err(e) = layer.store.save(&mut session).await {
        tracing::warn!(session = %session.id(), error = %e, "session save failed");
    }

    let cookie = format!("{}={}", layer.cookie_name, session.id());
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => {
            tracing::error!(error = %e, "session cookie is not a valid header value");
        }
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_cookie(value: &str) -> Request {
        Request::builder()
            .uri("/")
            .header(header::COOKIE, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn extracts_the_named_cookie() {
        let id = "00010203-0405-0607-0809-0a0b0c0d0e0f";
        let request = request_with_cookie(&format!("satchel_id={id}"));

        let extracted = extract_session_id(&request, "satchel_id").unwrap();
        assert_eq!(extracted.to_string(), id);
    }

    #[test]
    fn skips_unrelated_cookies() {
        let id = "00010203-0405-0607-0809-0a0b0c0d0e0f";
        let request = request_with_cookie(&format!("theme=dark; satchel_id={id}; lang=en"));

        assert!(extract_session_id(&request, "satchel_id").is_some());
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        let id = "00010203-0405-0607-0809-0a0b0c0d0e0f";
        let request = request_with_cookie(&format!("satchel_id_old={id}"));

        assert!(extract_session_id(&request, "satchel_id").is_none());
    }

    #[test]
    fn malformed_identifier_counts_as_absent() {
        let request = request_with_cookie("satchel_id=not-a-session-id");

        assert!(extract_session_id(&request, "satchel_id").is_none());
    }

    #[test]
    fn missing_cookie_header_counts_as_absent() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        assert!(extract_session_id(&request, "satchel_id").is_none());
    }
}
