//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves catalog pages under `/api/` (selected by the `page` query parameter) and
//! static files by path. Everything else is a 404. Every request target is recorded.
//! Replies can be held back for a while, or cut short of their advertised length.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub const CATALOG_PATH: &str = "/api/";

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
    /// Wait this long before answering at all.
    pub delay: Duration,
    /// Content-Length to advertise instead of the real body length.
    pub declared_len: Option<usize>,
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: Duration::ZERO,
            declared_len: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::ok(Vec::new())
        }
    }

    /// A 200 that advertises `declared_len` bytes but closes the connection after `body`.
    pub fn truncated(body: impl Into<Vec<u8>>, declared_len: usize) -> Self {
        Self {
            declared_len: Some(declared_len),
            ..Self::ok(body)
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Default)]
pub struct Routes {
    pages: HashMap<u32, Reply>,
    files: HashMap<String, Reply>,
}

impl Routes {
    pub fn page(mut self, page: u32, reply: Reply) -> Self {
        self.pages.insert(page, reply);
        self
    }

    pub fn file(mut self, path: &str, reply: Reply) -> Self {
        self.files.insert(path.to_string(), reply);
        self
    }
}

pub struct CatalogServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CatalogServer {
    /// Starts the server in a background thread. It runs until the process exits.
    pub fn start(routes: Routes) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        thread::spawn({
            let requests = Arc::clone(&requests);
            move || {
                for stream in listener.incoming().flatten() {
                    let routes = Arc::clone(&routes);
                    let requests = Arc::clone(&requests);
                    thread::spawn(move || handle(stream, &routes, &requests));
                }
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CATALOG_PATH)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request targets received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, routes: &Routes, requests: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let Ok(request) = std::str::from_utf8(&buf) else {
        return;
    };
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    requests.lock().unwrap().push(target.clone());

    let reply = route(&target, routes).unwrap_or_else(|| Reply::status(404));
    thread::sleep(reply.delay);
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reason(reply.status),
        reply.declared_len.unwrap_or(reply.body.len())
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
}

fn route(target: &str, routes: &Routes) -> Option<Reply> {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    if path == CATALOG_PATH {
        let page = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
            .and_then(|n| n.parse::<u32>().ok())?;
        return routes.pages.get(&page).cloned();
    }
    routes.files.get(path).cloned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
