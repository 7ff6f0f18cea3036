// tests/scraper.rs
//
// HttpScraper against a local server: redirects, status errors, raw store.
//
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use doms_access::{AppConfig, CaseId, HttpScraper, Scraper};

const BODY: &str = "<html><title>Dom</title><body>Sag 7</body></html>";

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("doms_scraper_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Serves `conns` connections, one request each:
/// `/sag/<id>/` answers 301 to `/moved/<id>`, `/moved/<id>` answers 200,
/// anything else 404. Sends back "<path> <user-agent>" per request.
fn serve(conns: usize) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();
    let origin = base.clone();

    thread::spawn(move || {
        for stream in listener.incoming().take(conns) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let path = request_line.split_whitespace().nth(1).unwrap_or("").to_string();

            let mut agent = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" { break; }
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("user-agent:") {
                    agent = v.trim().to_string();
                }
            }
            tx.send(format!("{path} {agent}")).unwrap();

            let resp = if let Some(id) = path.strip_prefix("/sag/") {
                format!(
                    "HTTP/1.1 301 Moved Permanently\r\nLocation: {origin}/moved/{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    id.trim_end_matches('/')
                )
            } else if path.starts_with("/moved/") {
                format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{BODY}",
                    BODY.len()
                )
            } else {
                "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
            };
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
    });

    (base, rx)
}

fn config(base: &str, raw_dir: PathBuf) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.base_url = base.to_string();
    cfg.case_path = "/sag/{id}/".to_string();
    cfg.raw_dir = raw_dir;
    cfg.timeout_secs = 5;
    cfg.user_agent = "doms-test/1".to_string();
    cfg
}

#[test]
fn follows_redirect_and_stores_the_final_body() {
    let (base, seen) = serve(2);
    let dir = tmp_dir("redirect");
    let scraper = HttpScraper::new(&config(&base, dir.clone())).unwrap();

    let written = scraper.fetch_to_store(&CaseId::from(7)).unwrap();

    assert_eq!(written, dir.join("7").join("page.html"));
    assert_eq!(fs::read_to_string(&written).unwrap(), BODY);
    assert_eq!(seen.recv().unwrap(), "/sag/7/ doms-test/1");
    assert_eq!(seen.recv().unwrap(), "/moved/7 doms-test/1");
}

#[test]
fn non_success_status_is_an_error_and_writes_nothing() {
    let (base, _seen) = serve(1);
    let dir = tmp_dir("status");
    let mut cfg = config(&base, dir.clone());
    cfg.case_path = "/gone/{id}".to_string();
    let mut scraper = HttpScraper::new(&cfg).unwrap();

    let err = scraper.scrape(&CaseId::from("9")).unwrap_err();

    assert_eq!(err.to_string(), format!("HTTP error: 404 Not Found ({base}/gone/9)"));
    assert!(!dir.join("9").exists());
}

#[test]
fn default_config_targets_the_https_case_page() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.case_url("1234"), "https://domsdatabasen.dk/#sag/1234/");
}
