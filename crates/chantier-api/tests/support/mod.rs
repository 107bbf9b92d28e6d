//! Scripted backend for API client tests.
//!
//! A `tiny_http` server on `127.0.0.1:0` answering each request with the next
//! scripted reply and recording what it received.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use chantier_api::ApiClient;
use chantier_config::ApiConfig;
use chantier_store::Storage;

#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct MockBackend {
    pub base_url: String,
    server: Arc<tiny_http::Server>,
    captured: Arc<Mutex<Vec<Captured>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockBackend {
    /// Start a server that answers requests with `replies` in order, then 404.
    pub fn start(replies: Vec<(u16, &str)>) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend"));
        let port = server.server_addr().to_ip().expect("ip listener").port();
        let captured = Arc::new(Mutex::new(Vec::new()));
        let mut replies: VecDeque<(u16, String)> = replies
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();

        let handle = {
            let server = Arc::clone(&server);
            let captured = Arc::clone(&captured);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let header = |name: &'static str| {
                        request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv(name))
                            .map(|h| h.value.as_str().to_string())
                    };
                    let authorization = header("Authorization");
                    let content_type = header("Content-Type");
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);

                    captured.lock().unwrap().push(Captured {
                        method: request.method().to_string(),
                        url: request.url().to_string(),
                        authorization,
                        content_type,
                        body,
                    });

                    let (status, body) = replies.pop_front().unwrap_or((404, String::new()));
                    let response = tiny_http::Response::from_string(body)
                        .with_status_code(status)
                        .with_header(
                            tiny_http::Header::from_bytes("Content-Type", "application/json")
                                .unwrap(),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            base_url: format!("http://127.0.0.1:{port}/api"),
            server,
            captured,
            handle: Some(handle),
        }
    }

    pub fn client(&self, storage: Storage) -> ApiClient {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: Some(5),
        };
        ApiClient::new(&config, storage).expect("client builds")
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
