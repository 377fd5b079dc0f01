use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use serde_json::Value;
use warp::http::StatusCode;
use warp::Filter;

/// A stand-in for an Ollama server on an ephemeral port that answers every
/// request with a canned status and body, and records the JSON it received.
pub struct FakeOllama {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeOllama {
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn spawn_chat_server(status: u16, body: &str) -> FakeOllama {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&requests);
    let body = body.to_string();
    let status = StatusCode::from_u16(status).unwrap();

    let chat = warp::post()
        .and(warp::path!("api" / "chat"))
        .and(warp::body::json())
        .map(move |request: Value| {
            sink.lock().unwrap().push(request);
            warp::reply::with_status(
                warp::reply::with_header(body.clone(), "content-type", "application/json"),
                status,
            )
        });

    let (addr, server) = warp::serve(chat).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    FakeOllama {
        base_url: format!("http://{addr}"),
        requests,
    }
}

pub async fn spawn_tags_server(status: u16, body: &str) -> FakeOllama {
    let body = body.to_string();
    let status = StatusCode::from_u16(status).unwrap();

    let tags = warp::get()
        .and(warp::path!("api" / "tags"))
        .map(move || {
            warp::reply::with_status(
                warp::reply::with_header(body.clone(), "content-type", "application/json"),
                status,
            )
        });

    let (addr, server) = warp::serve(tags).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    FakeOllama {
        base_url: format!("http://{addr}"),
        requests: Arc::new(Mutex::new(Vec::new())),
    }
}

/// A local URL with nothing listening on it.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
