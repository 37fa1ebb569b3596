// crates/flow-generator-client/tests/common/mod.rs
// ============================================================================
// Module: Flow Generator Test Fixtures
// Description: Stub prediction servers for flow generator client tests.
// Purpose: Serve canned responses and capture the requests the client sends.
// Dependencies: flow-generator-client, tiny_http
// ============================================================================

//! ## Overview
//! Single-threaded `tiny_http` servers that answer a fixed script of responses
//! and hand back what the client sent.

#![allow(
    dead_code,
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Shared test helpers are not used by every test binary."
)]

use std::net::TcpListener;
use std::thread;

use flow_generator_client::FlowGeneratorClient;
use flow_generator_client::FlowGeneratorConfig;
use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;

/// Request observed by a stub server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Canned response served by a stub server.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Spawns a server answering each canned response in order, then exits.
///
/// Returns the base URL and a handle yielding the captured requests.
pub fn spawn_predict_server(
    responses: Vec<CannedResponse>,
) -> (String, thread::JoinHandle<Vec<CapturedRequest>>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base_url = format!("http://{addr}");
    let handle = thread::spawn(move || {
        let mut captured = Vec::new();
        for canned in responses {
            let Ok(mut request) = server.recv() else {
                break;
            };
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let content_type = request
                .headers()
                .iter()
                .find(|header| header.field.equiv("Content-Type"))
                .map(|header| header.value.as_str().to_string());
            captured.push(CapturedRequest {
                method: request.method().as_str().to_string(),
                path: request.url().to_string(),
                content_type,
                body,
            });
            let header =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
            let response = Response::from_string(canned.body)
                .with_status_code(canned.status)
                .with_header(header);
            let _ = request.respond(response);
        }
        captured
    });
    (base_url, handle)
}

/// Builds a client pointed at the given base URL.
pub fn client_for(base_url: &str) -> FlowGeneratorClient {
    FlowGeneratorClient::new(FlowGeneratorConfig {
        service_base_url: base_url.to_string(),
        ..FlowGeneratorConfig::default()
    })
    .unwrap()
}

/// Returns a base URL on a port with no listener.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
