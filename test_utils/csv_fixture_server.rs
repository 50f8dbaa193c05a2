use log::debug;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A local HTTP server answering exactly one request with a canned response.
///
/// Joining the server returns the request line it received (e.g. `GET /path HTTP/1.1`).
pub struct CsvFixtureServer {
    base_url: String,
    handle: JoinHandle<String>,
}

impl CsvFixtureServer {
    pub fn start(status_line: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind fixture server");
        let address = listener.local_addr().expect("Failed to read local address");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("Failed to accept connection");

            let mut reader = BufReader::new(stream.try_clone().expect("Failed to clone stream"));
            let mut request_line = String::new();
            reader
                .read_line(&mut request_line)
                .expect("Failed to read request line");

            // Drain the remaining headers
            loop {
                let mut line = String::new();
                let read = reader.read_line(&mut line).expect("Failed to read header");
                if read == 0 || line == "\r\n" {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream
                .write_all(response.as_bytes())
                .expect("Failed to write response");
            stream.flush().expect("Failed to flush response");

            debug!("Fixture server answered {:?}", request_line.trim_end());

            request_line.trim_end().to_string()
        });

        Self {
            base_url: format!("http://{}", address),
            handle,
        }
    }

    /// Accepts one connection and reads its request line, then holds the connection open
    /// for `hold` without ever writing a response.
    pub fn start_unresponsive(hold: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind fixture server");
        let address = listener.local_addr().expect("Failed to read local address");

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("Failed to accept connection");

            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            reader
                .read_line(&mut request_line)
                .expect("Failed to read request line");

            debug!("Fixture server holding {:?} unanswered", request_line.trim_end());
            thread::sleep(hold);

            request_line.trim_end().to_string()
        });

        Self {
            base_url: format!("http://{}", address),
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Waits for the single request and returns its request line.
    pub fn join(self) -> String {
        self.handle.join().expect("Fixture server thread panicked")
    }
}
