//! One-shot HTTP server for exercising the reqwest-backed clients

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server that answers exactly one request with a fixed response.
pub(crate) struct OneShotServer {
    pub base_url: String,
    request_line: JoinHandle<String>,
}

impl OneShotServer {
    /// Bind to an ephemeral local port and reply with `status` and `body`.
    ///
    /// `status` is the full status text, e.g. `"404 Not Found"`.
    pub async fn start(status: &'static str, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let request_line = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let header = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            socket.write_all(header.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();

            let head = String::from_utf8_lossy(&head).into_owned();
            head.lines().next().unwrap_or_default().to_string()
        });

        Self { base_url, request_line }
    }

    /// The request line the server received, e.g. `GET /path HTTP/1.1`.
    pub async fn request_line(self) -> String {
        self.request_line.await.unwrap()
    }
}
