//! HTTP client against a tiny in-process responder.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use symscan_core::config::ServiceConfig;
use symscan_core::error::SymscanError;
use symscan_core::pipeline::{run_steps, PipelineEventKind, PipelineStep, RunId};
use symscan_core::service::{DetectionService, HttpDetectionService};

struct Route {
    path: &'static str,
    status: u16,
    body: &'static [u8],
}

const fn ok(path: &'static str, body: &'static str) -> Route {
    Route {
        path,
        status: 200,
        body: body.as_bytes(),
    }
}

/// One request as seen by the responder.
struct Received {
    path: String,
    body: Vec<u8>,
}

type RequestLog = Arc<Mutex<Vec<Received>>>;

fn paths(log: &RequestLog) -> Vec<String> {
    log.lock().unwrap().iter().map(|r| r.path.clone()).collect()
}

/// Serves `routes` on a loopback port until the test process exits.
/// Returns the base URL and the log of received requests.
fn serve(routes: Vec<Route>) -> (String, RequestLog) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            handle(stream, &routes, &seen);
        }
    });

    (format!("http://{addr}"), log)
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

fn is_chunked(head: &str) -> bool {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .any(|(name, value)| {
            name.trim().eq_ignore_ascii_case("transfer-encoding")
                && value.to_ascii_lowercase().contains("chunked")
        })
}

/// Reads the request line, headers and the whole body before answering, so
/// the client never sees its upload cut off.
fn handle(mut stream: TcpStream, routes: &[Route], log: &Mutex<Vec<Received>>) {
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];
    let split = loop {
        if let Some(end) = header_end(&data) {
            break end;
        }
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    };
    let head = String::from_utf8_lossy(&data[..split]).into_owned();
    let mut body = data[split..].to_vec();

    let chunked = is_chunked(&head);
    let expected = content_length(&head);
    loop {
        let done = if chunked {
            body.ends_with(b"0\r\n\r\n")
        } else {
            body.len() >= expected
        };
        if done {
            break;
        }
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => body.extend_from_slice(&buf[..n]),
        }
    }

    let path = head
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(Received {
        path: path.clone(),
        body,
    });

    let (status, reply): (u16, &[u8]) = routes
        .iter()
        .find(|r| r.path == path)
        .map(|r| (r.status, r.body))
        .unwrap_or((404, &b"{\"detail\":\"Not Found\"}"[..]));
    let reason = if status == 200 { "OK" } else { "Error" };
    let header = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n",
        reply.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(reply);
    let _ = stream.flush();
}

/// Accepts connections and never answers them.
fn serve_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            held.push(stream);
        }
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> HttpDetectionService {
    client_with_timeout(base_url, 5)
}

fn client_with_timeout(base_url: &str, request_timeout_secs: u64) -> HttpDetectionService {
    let config = ServiceConfig {
        base_url: base_url.to_string(),
        request_timeout_secs,
        connect_timeout_secs: 2,
    };
    HttpDetectionService::new(&config).unwrap()
}

const RESULTS: &str = r#"{
    "summary": {"total_pages": 1, "items_found": 1, "total_detections": 2},
    "detections": [
        {"class_name": "Door", "confidence": 0.9},
        {"class_name": "Door", "confidence": 0.7}
    ],
    "page_detections": {"1": [
        {"class_name": "Door", "confidence": 0.9},
        {"class_name": "Door", "confidence": 0.7}
    ]},
    "meta_data": {"1": {"drawing_title": "Level 1"}},
    "pages": [{"page": 1, "url": "/outputs/run/run_1/page_1.jpg"}],
    "preview": "/outputs/run/run_1/page_1.jpg"
}"#;

#[test]
fn test_full_run_over_http() {
    let (base, log) = serve(vec![
        ok("/preprocess", r#"{"status":"success","pages":1}"#),
        ok("/load_model", r#"{"status":"success"}"#),
        ok("/inference", r#"{"status":"success"}"#),
        ok("/results", RESULTS),
    ]);
    let service = client(&base);

    let mut completed = None;
    run_steps(&service, RunId(1), |event| {
        if let PipelineEventKind::Completed(results) = event.kind {
            completed = Some(results);
        }
    });

    let results = completed.expect("run should complete");
    assert_eq!(results.total_pages(), 1);
    assert_eq!(results.overall_rows()[0].count, 2);
    assert_eq!(
        paths(&log),
        ["/preprocess", "/load_model", "/inference", "/results"]
    );
}

#[test]
fn test_non_success_status_fails_step() {
    let (base, _) = serve(vec![Route {
        path: "/preprocess",
        status: 500,
        body: b"{\"detail\":\"boom\"}",
    }]);
    let err = client(&base)
        .run_step(PipelineStep::Preprocess)
        .unwrap_err();
    assert!(
        matches!(err, SymscanError::UnexpectedStatus { status: 500, ref path } if path == "/preprocess"),
        "got: {err}"
    );
}

#[test]
fn test_failed_ack_fails_step() {
    let (base, log) = serve(vec![
        ok("/preprocess", r#"{"status":"success"}"#),
        ok("/load_model", r#"{"status":"failed","error":"weights missing"}"#),
    ]);
    let service = client(&base);

    let mut failure = None;
    run_steps(&service, RunId(3), |event| {
        if let PipelineEventKind::Failed { step, message } = event.kind {
            failure = Some((step, message));
        }
    });

    let (step, message) = failure.expect("run should fail");
    assert_eq!(step, PipelineStep::LoadModel);
    assert!(message.contains("weights missing"), "got: {message}");
    assert_eq!(paths(&log), ["/preprocess", "/load_model"]);
}

#[test]
fn test_results_error_payload() {
    let (base, _) = serve(vec![ok("/results", r#"{"error":"No results found"}"#)]);
    let err = client(&base).fetch_results().unwrap_err();
    assert!(matches!(err, SymscanError::StepRejected { .. }), "got: {err}");
}

#[test]
fn test_reset_and_image_fetch() {
    let (base, log) = serve(vec![
        ok("/reset", r#"{"status":"success","message":"Storage cleared"}"#),
        Route {
            path: "/outputs/run/run_1/page_1.jpg",
            status: 200,
            body: &[0xFF, 0xD8, 0xFF, 0xE0],
        },
    ]);
    let service = client(&base);

    service.reset().unwrap();
    let bytes = service.fetch_image("/outputs/run/run_1/page_1.jpg").unwrap();
    assert_eq!(bytes, [0xFF, 0xD8, 0xFF, 0xE0]);

    let missing = service.fetch_image("/outputs/nope.jpg").unwrap_err();
    assert!(matches!(missing, SymscanError::UnexpectedStatus { status: 404, .. }));
    assert_eq!(log.lock().unwrap().len(), 3);
}

#[test]
fn test_unreachable_backend_is_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let service = client(&format!("http://127.0.0.1:{port}"));
    let err = service.run_step(PipelineStep::Inference).unwrap_err();
    assert!(matches!(err, SymscanError::Http(_)), "got: {err}");
}

#[test]
fn test_upload_rejects_unsupported_extension_without_request() {
    let (base, log) = serve(Vec::new());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let err = client(&base).upload(&path).unwrap_err();
    assert!(matches!(err, SymscanError::UnsupportedExtension(_)));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_upload_complete_is_success() {
    let (base, log) = serve(vec![ok(
        "/upload",
        r#"{"filename":"plan.pdf","path":"uploads/plan.pdf","status":"Complete"}"#,
    )]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.pdf");
    let payload = vec![b'%'; 200 * 1024];
    std::fs::write(&path, &payload).unwrap();

    let outcome = client(&base).upload(&path).unwrap();
    assert!(outcome.is_success());
    assert_eq!(outcome.filename.as_deref(), Some("plan.pdf"));

    let requests = log.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/upload");
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="file""#), "multipart field missing");
    assert!(requests[0].body.len() > payload.len());
}

#[test]
fn test_upload_failed_status_is_not_success() {
    let (base, _) = serve(vec![ok(
        "/upload",
        r#"{"error":"disk full","status":"failed"}"#,
    )]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let outcome = client(&base).upload(&path).unwrap();
    assert!(!outcome.is_success());
    assert_eq!(outcome.error.as_deref(), Some("disk full"));
}

#[test]
fn test_silent_backend_times_out() {
    let base = serve_silent();
    let service = client_with_timeout(&base, 1);

    let start = Instant::now();
    let err = service.run_step(PipelineStep::Preprocess).unwrap_err();
    let elapsed = start.elapsed();

    assert!(matches!(err, SymscanError::Http(_)), "got: {err}");
    assert!(elapsed >= Duration::from_millis(900), "returned after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(10), "returned after {elapsed:?}");
}
