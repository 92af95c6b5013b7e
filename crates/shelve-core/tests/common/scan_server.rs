//! Minimal HTTP/1.1 server standing in for a Subsonic `startScan` endpoint.
//!
//! Answers every request with a fixed status (or a fixed redirect) and records
//! the request head (request line and headers) so tests can inspect what was sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// e.g. `GET /rest/startScan.view?u=admin&... HTTP/1.1`
    pub request_line: String,
    /// Header lines as `(lowercase name, value)`.
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Path and query of the request line.
    pub fn target(&self) -> &str {
        self.request_line.split_whitespace().nth(1).unwrap_or("")
    }
}

/// Handle to a running server. Runs until the process exits.
pub struct ScanServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ScanServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// What the server sends back for every request.
#[derive(Debug, Clone)]
enum Reply {
    Status(u16),
    Redirect(String),
}

/// Starts a server in a background thread answering every request with `status`.
pub fn start(status: u16) -> ScanServer {
    start_with_reply(Reply::Status(status))
}

/// Starts a server answering every request with `302 Found` to `location`.
pub fn start_redirect(location: &str) -> ScanServer {
    start_with_reply(Reply::Redirect(location.to_string()))
}

fn start_with_reply(reply: Reply) -> ScanServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &reply, &recorded);
        }
    });
    ScanServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// A base URL nothing is listening on (connection refused).
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, reply: &Reply, recorded: &Mutex<Vec<RecordedRequest>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut head = Vec::new();
    let mut buf = [0u8; 4096];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    let text = String::from_utf8_lossy(&head);
    let mut lines = text.lines();
    let request_line = lines.next().unwrap_or("").trim().to_string();
    let headers = lines
        .take_while(|l| !l.trim().is_empty())
        .filter_map(|l| l.split_once(':'))
        .map(|(n, v)| (n.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();
    recorded.lock().unwrap().push(RecordedRequest {
        request_line,
        headers,
    });

    let response = match reply {
        Reply::Status(status) => {
            let body = r#"{"subsonic-response":{"status":"ok","version":"1.16.1"}}"#;
            format!(
                "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
        }
        Reply::Redirect(location) => format!(
            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            location
        ),
    };
    let _ = stream.write_all(response.as_bytes());
}
