//! Static file server for the built landing page
//!
//! Serves the Trunk output from the dist/ directory on port 8080,
//! with a fallback to index.html for unknown paths.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST: &str = "dist";

fn main() {
    let listener = TcpListener::bind(ADDR).expect("Failed to bind to port 8080");

    println!("AI Bildwerk landing page at http://{}", ADDR);
    println!("Serving from {}/ directory", DIST);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let path = request_path(&request_line);
    let file_path = resolve(path);

    let (body, status) = match fs::read(&file_path) {
        Ok(contents) => (contents, "200 OK"),
        Err(_) => {
            eprintln!("File not found: {}", file_path.display());
            (
                b"<!DOCTYPE html><html><body><h1>404 Not Found</h1></body></html>".to_vec(),
                "404 NOT FOUND",
            )
        }
    };

    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type(&file_path),
        body.len()
    );

    if let Err(e) = stream
        .write_all(header.as_bytes())
        .and_then(|_| stream.write_all(&body))
    {
        eprintln!("Failed to write response: {}", e);
        return;
    }

    let _ = stream.flush();
}

/// Extract the path component from an HTTP/1.1 request line,
/// discarding any query string.
fn request_path(request_line: &str) -> &str {
    let full = request_line.split_whitespace().nth(1).unwrap_or("/");
    full.split('?').next().unwrap_or("/")
}

/// Map a request path to a file under dist/. Anything that does not
/// exist as a file falls back to index.html (anchor-only navigation
/// means every page load is the index anyway).
fn resolve(path: &str) -> PathBuf {
    let index = Path::new(DIST).join("index.html");
    if path == "/" || path.is_empty() {
        return index;
    }

    let candidate = Path::new(DIST).join(path.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("GET / HTTP/1.1"), "/");
        assert_eq!(request_path("GET /styles.css HTTP/1.1"), "/styles.css");
        assert_eq!(request_path("GET /index.html?ref=mail HTTP/1.1"), "/index.html");
        assert_eq!(request_path(""), "/");
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("dist/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("dist/styles.css")), "text/css");
        assert_eq!(content_type(Path::new("dist/app.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("dist/app_bg.js")), "application/javascript");
        assert_eq!(content_type(Path::new("dist/logo")), "application/octet-stream");
    }

    #[test]
    fn test_resolve_root_is_index() {
        assert_eq!(resolve("/"), Path::new("dist").join("index.html"));
        assert_eq!(resolve(""), Path::new("dist").join("index.html"));
    }

    #[test]
    fn test_resolve_missing_file_falls_back_to_index() {
        assert_eq!(resolve("/no/such/page"), Path::new("dist").join("index.html"));
    }
}
