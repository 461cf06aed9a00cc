//! Minimal HTTP/1.1 stub standing in for Scryfall in tests.
//!
//! Each route answers one exact request target. Unknown targets get a
//! Scryfall-style 404 error object. JSON bodies may contain `{base}`, which is
//! replaced by the server's own base URL so records can point at stub images.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Client that talks to the stub directly, ignoring any proxy settings
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("test client should build")
}

#[derive(Debug, Clone)]
pub struct Route {
    target: String,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Route {
    pub fn json(target: &str, body: &str) -> Self {
        Self {
            target: target.to_string(),
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(target: &str, body: &[u8]) -> Self {
        Self {
            target: target.to_string(),
            status: 200,
            content_type: "image/jpeg",
            body: body.to_vec(),
        }
    }

    pub fn status(target: &str, status: u16) -> Self {
        Self {
            target: target.to_string(),
            status,
            content_type: "application/json",
            body: format!(r#"{{"object":"error","status":{}}}"#, status).into_bytes(),
        }
    }

    fn with_base(mut self, base: &str) -> Self {
        if self.content_type == "application/json" {
            let body = String::from_utf8_lossy(&self.body).replace("{base}", base);
            self.body = body.into_bytes();
        }
        self
    }
}

pub struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let addr = listener.local_addr().expect("local addr should resolve");
        let base = format!("http://{}", addr);

        let routes: Arc<Vec<Route>> =
            Arc::new(routes.into_iter().map(|r| r.with_base(&base)).collect());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&requests);

        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let captured = Arc::clone(&captured);
                tokio::spawn(async move {
                    let _ = serve(stream, &routes, &captured).await;
                });
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request targets received so far, in arrival order
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: &[Route],
    captured: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        head.extend_from_slice(&chunk[..read]);
    }

    let head = String::from_utf8_lossy(&head);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string();
    captured.lock().await.push(target.clone());

    let not_found = Route::status(&target, 404);
    let route = routes
        .iter()
        .find(|route| route.target == target)
        .unwrap_or(&not_found);

    let reason = match route.status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
        route.status,
        reason,
        route.content_type,
        route.body.len()
    );
    stream.write_all(header.as_bytes()).await?;
    stream.write_all(&route.body).await?;
    stream.shutdown().await
}
