use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::models::QuestionRecord;

use super::QuestionStore;

/// Why a load did not produce a store.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request failed, the server answered with a non-success status, or
    /// the file could not be read.
    #[error("{0}")]
    Fetch(String),
    /// The body was not a question list in either accepted shape.
    #[error("Failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the questions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Http(String),
    File(PathBuf),
}

impl QuestionSource {
    /// `http://` and `https://` endpoints are fetched; anything else is read
    /// from disk, with an optional `file://` prefix.
    pub fn parse(endpoint: &str) -> Self {
        let endpoint = endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            Self::Http(endpoint.to_string())
        } else {
            let path = endpoint.strip_prefix("file://").unwrap_or(endpoint);
            Self::File(PathBuf::from(path))
        }
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Http(url) => write!(f, "{}", url),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The `{ "questions": [...] }` payload shape. Other keys are ignored.
#[derive(Deserialize)]
struct Wrapped {
    questions: Vec<QuestionRecord>,
}

/// Parse a response body into question records.
///
/// A body starting with `[` is read as a bare list, anything else as the
/// wrapped shape, so serde errors point at the offending line and column.
pub fn parse_questions(body: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let records = if body.trim_start().starts_with('[') {
        serde_json::from_str(body)?
    } else {
        serde_json::from_str::<Wrapped>(body)?.questions
    };
    Ok(records)
}

/// Load all questions from `source` and build the session's store.
pub async fn load(
    source: &QuestionSource,
    timeout: Option<Duration>,
) -> Result<QuestionStore, LoadError> {
    info!("Loading questions from {}", source);

    let body = match source {
        QuestionSource::Http(url) => fetch(url, timeout).await?,
        QuestionSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            LoadError::Fetch(format!("Failed to read {}: {}", path.display(), e))
        })?,
    };
    debug!("Received {} bytes", body.len());

    let store = QuestionStore::from_records(parse_questions(&body)?);
    info!(
        "Loaded {} questions in {} categories",
        store.len(),
        store.categories().count()
    );
    Ok(store)
}

async fn fetch(url: &str, timeout: Option<Duration>) -> Result<String, LoadError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    #[cfg(test)]
    let builder = builder.no_proxy();

    let client = builder
        .build()
        .map_err(|e| LoadError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Fetch(format!("Failed to fetch questions: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Fetch(format!(
            "Failed to fetch questions (HTTP {})",
            status
        )));
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::Fetch(format!("Failed to read response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    const SAMPLE: &str = r#"[
        {"question": "2+2?", "answer": "4", "category": "arithmetic", "difficulty": "easy"},
        {"question": "∫x dx", "answer": "x²/2+C", "category": "calculus", "difficulty": "hard"}
    ]"#;

    /// Serve a single HTTP response on a local port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = stream.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });

        format!("http://{}/questions", addr)
    }

    #[test]
    fn test_parse_bare_sequence() {
        let records = parse_questions(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category(), Some("calculus"));
    }

    #[test]
    fn test_parse_wrapped_object() {
        let body = r#"{"questions": [{"text": "Define a ring"}], "total": 1}"#;
        let records = parse_questions(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body(), "Define a ring");
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(
            parse_questions(r#"{"items": []}"#),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(parse_questions("not json"), Err(LoadError::Parse(_))));
        assert!(matches!(
            parse_questions(r#"{"questions": null}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_keeps_numeric_answers() {
        let body = r#"[
            {"question": "2+2?", "answer": 4, "category": "arithmetic", "difficulty": "easy"},
            {"question": "ok", "answer": "x"}
        ]"#;
        let records = parse_questions(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].answer(), Some("4"));
        assert_eq!(records[1].answer(), Some("x"));
    }

    #[test]
    fn test_parse_error_reports_position() {
        let body = "[\n  {\"question\": \"a\"},\n  {\"question\": }\n]";
        let err = parse_questions(body).unwrap_err();
        match err {
            LoadError::Parse(inner) => {
                assert_eq!(inner.line(), 3);
                assert!(inner.column() > 0);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            QuestionSource::parse("https://example.com/q.json"),
            QuestionSource::Http("https://example.com/q.json".to_string())
        );
        assert_eq!(
            QuestionSource::parse("file:///tmp/q.json"),
            QuestionSource::File(PathBuf::from("/tmp/q.json"))
        );
        assert_eq!(
            QuestionSource::parse("questions.json"),
            QuestionSource::File(PathBuf::from("questions.json"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = QuestionSource::File(file.path().to_path_buf());
        let store = load(&source, None).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.categories().collect::<Vec<_>>(),
            vec!["arithmetic", "calculus"]
        );
    }

    #[tokio::test]
    async fn test_load_missing_file_is_fetch_error() {
        let source = QuestionSource::File(PathBuf::from("/definitely/not/here.json"));
        let err = load(&source, None).await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch(_)));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let url = serve_once("200 OK", SAMPLE).await;
        let store = load(&QuestionSource::Http(url), None).await.unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_load_non_success_status() {
        let url = serve_once("500 Internal Server Error", "{}").await;
        let err = load(&QuestionSource::Http(url), None).await.unwrap_err();
        match err {
            LoadError::Fetch(message) => {
                assert!(message.starts_with("Failed to fetch questions"));
                assert!(message.contains("500"));
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_times_out_on_silent_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/questions", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let err = load(&QuestionSource::Http(url), Some(Duration::from_millis(200)))
            .await
            .unwrap_err();
        match err {
            LoadError::Fetch(message) => {
                assert!(message.starts_with("Failed to fetch questions"))
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_malformed_body() {
        let url = serve_once("200 OK", "<html>oops</html>").await;
        let err = load(&QuestionSource::Http(url), None).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
