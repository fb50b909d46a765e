// ~/quote-widget/src/quote/remote.rs

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use serde::Deserialize;

use crate::error::QuoteError;
use crate::{info, warn};

/// Extra time the caller waits for the worker beyond the HTTP timeout.
const WORKER_GRACE: Duration = Duration::from_millis(500);

/// One entry of the quotes API list response.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteQuote {
    #[serde(rename = "q")]
    pub quote: String,
    #[serde(rename = "a")]
    pub author: String,
}

impl RemoteQuote {
    pub fn display_text(&self) -> String {
        let quote = self.quote.trim();
        let author = self.author.trim();
        if author.is_empty() {
            quote.to_string()
        } else {
            format!("{quote}\n- {author}")
        }
    }
}

/// Parse the API body: a list whose first element carries the quote.
pub fn parse_quote_body(body: &str) -> Result<RemoteQuote, QuoteError> {
    let entries: Vec<RemoteQuote> = serde_json::from_str(body)?;
    entries
        .into_iter()
        .next()
        .filter(|entry| !entry.quote.trim().is_empty())
        .ok_or(QuoteError::Empty)
}

pub fn fetch_quote(url: &str, timeout: Duration) -> Result<RemoteQuote, QuoteError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into();

    let response = agent.get(url).call()?;
    let body = response.into_body().read_to_string()?;
    parse_quote_body(&body)
}

/// Fetch or fall back, never failing.
pub fn quote_or_fallback(url: &str, timeout: Duration, fallback: &str) -> String {
    match fetch_quote(url, timeout) {
        Ok(quote) => {
            info!("Fetched remote quote from {url}");
            quote.display_text()
        }
        Err(e) => {
            warn!("Remote quote unavailable, using fallback: {e}");
            fallback.to_string()
        }
    }
}

/// Run the lookup off the calling thread and wait at most `timeout` plus a
/// short grace period for it.
pub fn fetch_on_worker(url: &str, timeout: Duration, fallback: &str) -> String {
    let (tx, rx) = mpsc::channel();
    let worker_url = url.to_string();
    let worker_fallback = fallback.to_string();

    thread::spawn(move || {
        let _ = tx.send(quote_or_fallback(&worker_url, timeout, &worker_fallback));
    });

    match rx.recv_timeout(timeout + WORKER_GRACE) {
        Ok(text) => text,
        Err(e) => {
            warn!("Remote quote worker did not answer in time: {e}");
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::time::Instant;

    const FALLBACK: &str = "Keep going.";

    fn read_request(stream: &mut TcpStream) {
        let mut buf = [0u8; 1024];
        let mut seen = Vec::new();
        while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(n) => seen.extend_from_slice(&buf[..n]),
            }
        }
    }

    /// Serve one canned response, return the URL to hit.
    fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                read_request(&mut stream);
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/api/today")
    }

    /// Accept the connection and never answer.
    fn serve_silence() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                read_request(&mut stream);
                thread::sleep(Duration::from_secs(3));
            }
        });
        format!("http://{addr}/api/today")
    }

    #[test]
    fn parses_first_entry() {
        let body = r#"[{"q":"Act now.","a":"Someone","h":"<b>ignored</b>"},{"q":"Later","a":"Else"}]"#;
        let quote = parse_quote_body(body).unwrap();
        assert_eq!(quote.display_text(), "Act now.\n- Someone");
    }

    #[test]
    fn missing_author_field_is_rejected() {
        assert!(parse_quote_body(r#"[{"q":"Just this."}]"#).is_err());
        assert_eq!(
            quote_or_fallback(&serve_once(r#"[{"q":"Just this."}]"#), Duration::from_secs(2), FALLBACK),
            FALLBACK
        );
    }

    #[test]
    fn empty_author_shows_quote_only() {
        let quote = parse_quote_body(r#"[{"q":"Just this.","a":""}]"#).unwrap();
        assert_eq!(quote.display_text(), "Just this.");
    }

    #[test]
    fn shape_deviations_are_errors() {
        for body in ["{oops", "[]", r#"{"q":"not a list"}"#, r#"[{"q":42,"a":"x"}]"#, r#"[{"a":"x"}]"#, r#"[{"q":"x"}]"#, r#"[{"q":"x","a":7}]"#, r#"[{"q":"  ","a":"x"}]"#] {
            assert!(parse_quote_body(body).is_err(), "body {body:?}");
        }
    }

    #[test]
    fn served_quote_is_displayed() {
        let url = serve_once(r#"[{"q":"Ship it.","a":"Team"}]"#);
        let text = quote_or_fallback(&url, Duration::from_secs(2), FALLBACK);
        assert_eq!(text, "Ship it.\n- Team");
    }

    #[test]
    fn malformed_body_yields_fallback() {
        let url = serve_once("{oops");
        assert_eq!(quote_or_fallback(&url, Duration::from_secs(2), FALLBACK), FALLBACK);
    }

    #[test]
    fn timeout_yields_fallback() {
        let url = serve_silence();
        let started = Instant::now();
        let text = fetch_on_worker(&url, Duration::from_millis(300), FALLBACK);
        assert_eq!(text, FALLBACK);
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn refused_connection_yields_fallback() {
        // Bind then drop to get a port nobody listens on.
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}/api/today");
        assert_eq!(quote_or_fallback(&url, Duration::from_millis(500), FALLBACK), FALLBACK);
    }
}
