//! In-process stand-in for the Zendesk ticket endpoint.

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::endpoints::TICKETS_PATH;

pub const ONE_TICKET: &str =
    r#"{"tickets":[{"url":"u1","id":1,"status":"open","recipient":"a@x.com"}],"next_page":null,"count":1}"#;

/// Behaviour of the fake `tickets.json` route.
#[derive(Clone)]
pub struct MockTickets {
    token: String,
    body: String,
    fail: bool,
}

impl MockTickets {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            body: ONE_TICKET.to_string(),
            fail: false,
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn respond(&self, headers: &HeaderMap) -> Response {
        let expected = format!("Bearer {}", self.token);
        let authorized = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == expected);

        if !authorized {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        if self.fail {
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
        ([(header::CONTENT_TYPE, "application/json")], self.body.clone()).into_response()
    }
}

/// Serve the mock on an ephemeral port and return its base URL (with a
/// trailing `/`).
pub async fn serve(mock: MockTickets) -> String {
    let app = Router::new().route(
        &format!("/{TICKETS_PATH}"),
        get(move |headers: HeaderMap| {
            let mock = mock.clone();
            async move { mock.respond(&headers) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
