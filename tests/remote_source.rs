#![cfg(feature = "remote")]

//! Remote element source against a local HTTP server

use std::time::Duration;

use elemcards::source::RemoteSource;
use elemcards::{ElementSource, Error};
use tiny_http::{Response, Server};

const DOCUMENT: &str = r#"{"elements": [
    {"number": 2, "symbol": "He", "name": "Helium", "atomic_mass": 4.0026022,
     "category": "noble gas", "xpos": 18, "ypos": 1},
    {"number": 1, "symbol": "H", "name": "Hydrogen", "atomic_mass": 1.008,
     "category": "diatomic nonmetal", "xpos": 1, "ypos": 1}
]}"#;

/// Serve a single request on an ephemeral port, optionally after a delay.
fn serve_once(status: u16, body: &'static str, delay: Duration) -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();
    std::thread::spawn(move || {
        if let Ok(req) = server.recv() {
            std::thread::sleep(delay);
            let resp = Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    "Content-Type: application/json"
                        .parse::<tiny_http::Header>()
                        .unwrap(),
                );
            let _ = req.respond(resp);
        }
    });
    format!("http://{}/PeriodicTableJSON.json", addr)
}

#[test]
fn fetches_and_sorts_elements() {
    let url = serve_once(200, DOCUMENT, Duration::ZERO);
    let source = RemoteSource::new(url, Duration::from_secs(5)).expect("client");
    let elements = source.load().expect("load");
    let symbols: Vec<&str> = elements.iter().map(|e| e.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["H", "He"]);
    assert_eq!(elements[1].grid.map(|g| (g.column, g.row)), Some((18, 1)));
}

#[test]
fn http_error_is_fatal() {
    let url = serve_once(404, "Not Found", Duration::ZERO);
    let source = RemoteSource::new(url, Duration::from_secs(5)).expect("client");
    let err = source.load().unwrap_err();
    assert!(matches!(err, Error::SourceFetch(_)), "{err}");
    assert!(err.is_fatal());
}

#[test]
fn slow_server_times_out() {
    let url = serve_once(200, DOCUMENT, Duration::from_secs(3));
    let source = RemoteSource::new(url, Duration::from_millis(200)).expect("client");
    let err = source.load().unwrap_err();
    assert!(matches!(err, Error::SourceFetch(_)), "{err}");
}

#[test]
fn garbage_body_is_fatal() {
    let url = serve_once(200, "<html>not json</html>", Duration::ZERO);
    let source = RemoteSource::new(url, Duration::from_secs(5)).expect("client");
    assert!(matches!(source.load(), Err(Error::SourceFetch(_))));
}
