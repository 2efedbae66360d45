#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// `rtiffin` with its own config and session files, so tests never touch
/// the real ones and never share state.
pub fn rtf(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rtiffin");
    cmd.args([
        "--config",
        &temp_path(name, "conf"),
        "--session",
        &temp_path(name, "session.yml"),
    ])
    .env_remove("RTIFFIN_API_URL");
    cmd
}

/// Unique path inside the system temp dir (not created)
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtiffin_{}.{}", name, ext));
    path.to_string_lossy().to_string()
}

/// Remove every file a test named `name` may have left behind
pub fn reset(name: &str) {
    for ext in ["conf", "session.yml", "json"] {
        fs::remove_file(temp_path(name, ext)).ok();
    }
}

/// Fresh, empty output directory for exports
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("rtiffin_{}_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create out dir");
    path
}

// ---------------------------------------------------------------------
// Fake order endpoint
// ---------------------------------------------------------------------

pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Reply {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            headers: vec![("Location".into(), location.into())],
            body: String::new(),
        }
    }
}

/// A request as received by the fake endpoint
#[derive(Debug)]
pub struct Captured {
    pub request_line: String,
    pub headers: Vec<String>,
    pub body: String,
}

impl Captured {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }

    pub fn header(&self, name: &str) -> Option<String> {
        let prefix = format!("{}:", name.to_lowercase());
        self.headers
            .iter()
            .find(|h| h.to_lowercase().starts_with(&prefix))
            .map(|h| h[prefix.len()..].trim().to_string())
    }
}

/// Local HTTP server answering exactly `replies.len()` connections, in order.
pub struct MockEndpoint {
    pub base: String,
    handle: JoinHandle<Vec<Captured>>,
}

impl MockEndpoint {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock endpoint");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for reply in replies {
                let (mut stream, _) = listener.accept().expect("accept");
                seen.push(read_request(&mut stream));

                let mut head = format!("HTTP/1.1 {} X\r\n", reply.status);
                for (k, v) in &reply.headers {
                    head.push_str(&format!("{k}: {v}\r\n"));
                }
                head.push_str(&format!(
                    "Content-Length: {}\r\nConnection: close\r\n\r\n",
                    reply.body.len()
                ));

                stream.write_all(head.as_bytes()).expect("write head");
                stream.write_all(reply.body.as_bytes()).expect("write body");
                stream.flush().ok();
            }
            seen
        });

        Self { base, handle }
    }

    /// Endpoint URL, shaped like a script deployment
    pub fn url(&self) -> String {
        format!("{}/exec", self.base)
    }

    /// Wait for all replies to be served and return what was received
    pub fn requests(self) -> Vec<Captured> {
        self.handle.join().expect("mock endpoint thread")
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> Captured {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end().to_string();
        if line.is_empty() {
            break;
        }
        if let Some(v) = line.to_lowercase().strip_prefix("content-length:") {
            content_length = v.trim().parse().unwrap_or(0);
        }
        headers.push(line);
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).expect("request body");

    Captured {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    }
}

/// A realistic `generateKitchenList` success payload with two orders
pub fn kitchen_list_reply() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "summary": {
                "date": "09/02/2026",
                "mealType": "Lunch",
                "totalOrders": 2,
                "updatedCount": 2,
                "lunchCount": 1,
                "dinnerCount": 0,
                "bothCount": 1,
                "vegCount": 1,
                "nonVegCount": 1,
                "skippedCount": 1
            },
            "orders": [
                [
                    "ORD20260209-0001", "Asha Rao", 9876543210u64, "12 Park Street", "Lunch",
                    "Veg", "Regular", "Monthly", "Paid", "No onion"
                ],
                [
                    "ORD20260209-0002", "Ravi Kumar", "9123456780", "4 Lake Road", "Both",
                    "Non-Veg", "Large", "Weekly", "Pending"
                ]
            ],
            "completedOrders": ["ORD20260101-0042"]
        }
    })
}
