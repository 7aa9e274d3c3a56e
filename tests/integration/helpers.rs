use parking_lot::Mutex;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StubResponse {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string().into_bytes(),
        }
    }

    pub fn bytes(body: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: "image/gif",
            body: body.to_vec(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "text/plain",
            body: b"not found".to_vec(),
        }
    }
}

type Handler = Arc<dyn Fn(&Url) -> StubResponse + Send + Sync>;

/// Minimal HTTP/1.1 server answering each request through `handler`.
pub struct StubServer {
    pub base_url: Url,
    requests: Arc<Mutex<Vec<Url>>>,
    task: tokio::task::JoinHandle<()>,
}

impl StubServer {
    pub async fn spawn(handler: impl Fn(&Url) -> StubResponse + Send + Sync + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let base_url = Url::parse(&format!("http://{addr}")).expect("stub server url");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Handler = Arc::new(handler);

        let task = {
            let base_url = base_url.clone();
            let requests = Arc::clone(&requests);
            tokio::spawn(async move {
                while let Ok((stream, _)) = listener.accept().await {
                    let base_url = base_url.clone();
                    let requests = Arc::clone(&requests);
                    let handler = Arc::clone(&handler);
                    tokio::spawn(async move {
                        serve(stream, &base_url, &requests, handler.as_ref()).await;
                    });
                }
            })
        };

        Self {
            base_url,
            requests,
            task,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    base_url: &Url,
    requests: &Mutex<Vec<Url>>,
    handler: &(dyn Fn(&Url) -> StubResponse + Send + Sync),
) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(read) => buffer.extend_from_slice(&chunk[..read]),
        }
    }

    let head = String::from_utf8_lossy(&buffer);
    let Some(target) = head.split_whitespace().nth(1) else {
        return;
    };
    let Ok(url) = base_url.join(target) else {
        return;
    };
    requests.lock().push(url.clone());

    let response = handler(&url);
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason(response.status),
        response.content_type,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes()).await;
    let _ = stream.write_all(&response.body).await;
    let _ = stream.shutdown().await;
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Address nothing listens on.
pub async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("probe url")
}

/// Client that never routes loopback traffic through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("failed to build client")
}

pub fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Trending response body serving `ids` as one page of a `total_count` feed.
pub fn trending_body(media_base: &Url, total_count: usize, offset: usize, ids: &[&str]) -> Value {
    let media = media_base.as_str().trim_end_matches('/');
    let data: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("GIF {id}"),
                "trending_datetime": "2021-05-21 19:17:34",
                "images": {
                    "original": {
                        "height": "480",
                        "width": "480",
                        "url": format!("{media}/media/{id}/giphy.gif")
                    },
                    "fixed_width_small": {
                        "height": "100",
                        "width": "100",
                        "url": format!("{media}/media/{id}/100w.gif")
                    }
                },
                "user": { "username": "giphy", "display_name": "GIPHY" }
            })
        })
        .collect();

    json!({
        "data": data,
        "pagination": {
            "total_count": total_count,
            "count": ids.len(),
            "offset": offset
        }
    })
}
