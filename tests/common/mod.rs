//! Shared mock backends for integration tests.

#![allow(dead_code)]

use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use watch_page::config::PageConfig;

/// What the mock saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Base URL with the `/api` prefix the page expects.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }

    pub fn total_hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Start a backend on an ephemeral port whose response is computed per
/// request.
pub async fn start_programmable_backend<F, Fut>(f: F) -> MockBackend
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let log = requests.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        log.lock().unwrap().push(request.clone());

                        let (status, body) = f(request).await;
                        let response = format!(
                            concat!(
                                "HTTP/1.1 {} Mock\r\n",
                                "Content-Type: application/json\r\n",
                                "Content-Length: {}\r\n",
                                "Connection: close\r\n\r\n{}"
                            ),
                            status,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockBackend { addr, requests }
}

/// Start a backend serving fixed JSON per path. Unknown paths get 404.
pub async fn start_json_backend(routes: &[(&str, u16, Value)]) -> MockBackend {
    let table: HashMap<String, (u16, String)> = routes
        .iter()
        .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
        .collect();
    let table = Arc::new(table);

    start_programmable_backend(move |request| {
        let table = table.clone();
        async move {
            table
                .get(&request.path)
                .cloned()
                .unwrap_or((404, r#"{"error":"not found"}"#.to_string()))
        }
    })
    .await
}

/// Start a backend that answers every request with the same status and body.
pub async fn start_fixed_backend(status: u16, body: &'static str) -> MockBackend {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

/// A base URL nothing listens on.
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

/// Config pointing at the given bases with short timeouts and redirect delay.
pub fn test_config(primary: String, secondary: String, redirect_delay_ms: u64) -> PageConfig {
    let mut config = PageConfig::default();
    config.endpoints.primary_base = primary;
    config.endpoints.secondary_base = secondary;
    config.session.redirect_delay_ms = redirect_delay_ms;
    config.timeouts.connect_secs = 2;
    config.timeouts.request_secs = 5;
    config
}

async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let mut lines = head.split("\r\n");
    let path = lines.next()?.split_whitespace().nth(1)?.to_string();

    let mut authorization = None;
    let mut request_id = None;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "authorization" => authorization = Some(value.trim().to_string()),
            "x-request-id" => request_id = Some(value.trim().to_string()),
            _ => {}
        }
    }

    Some(RecordedRequest {
        path,
        authorization,
        request_id,
    })
}
