use std::{
  collections::HashMap,
  io::{BufRead, BufReader, Write},
  net::TcpListener,
  thread,
};

pub(crate) struct TestServer {
  url: String,
}

impl TestServer {
  pub(crate) fn spawn(routes: HashMap<String, (u16, String)>) -> Self {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();

    let url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
      for stream in listener.incoming() {
        let Ok(mut stream) = stream else {
          break;
        };

        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();

        if reader.read_line(&mut request_line).is_err() {
          continue;
        }

        loop {
          let mut header = String::new();

          match reader.read_line(&mut header) {
            Ok(n) if n > 0 && header != "\r\n" => {}
            _ => break,
          }
        }

        let path = request_line
          .split_whitespace()
          .nth(1)
          .unwrap_or("/")
          .to_string();

        let (status, body) = routes
          .get(&path)
          .cloned()
          .unwrap_or((404, String::new()));

        let response = format!(
          "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
          body.len()
        );

        let _ = stream.write_all(response.as_bytes());
      }
    });

    Self { url }
  }

  pub(crate) fn url(&self) -> &str {
    &self.url
  }
}
