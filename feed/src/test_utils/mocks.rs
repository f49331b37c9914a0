//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and that
//! record how they were used.

use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing_subscriber::fmt::MakeWriter;

use crate::domain::entities::{PostSummary, QueryResult};
use crate::domain::ports::{ContentSource, HostPage, RenderSink};
use crate::error::ContentError;

// ============================================================================
// Mock Content Source
// ============================================================================

#[derive(Clone)]
enum MockResponse {
    Posts(QueryResult),
    ApiError(u16),
    Malformed,
}

pub struct MockContentSource {
    response: MockResponse,
    calls: AtomicUsize,
}

impl MockContentSource {
    fn new(response: MockResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_posts(posts: Vec<PostSummary>) -> Self {
        Self::new(MockResponse::Posts(Some(posts)))
    }

    /// Responds with `{"result": null}`
    pub fn with_null_result() -> Self {
        Self::new(MockResponse::Posts(None))
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::new(MockResponse::ApiError(status))
    }

    pub fn with_malformed_body() -> Self {
        Self::new(MockResponse::Malformed)
    }

    /// Number of fetches so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn fetch_posts(&self) -> Result<QueryResult, ContentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.response {
            MockResponse::Posts(posts) => Ok(posts.clone()),
            MockResponse::ApiError(status) => Err(ContentError::Api {
                status: *status,
                message: "mock failure".to_string(),
            }),
            MockResponse::Malformed => Err(ContentError::Deserialization(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }
}

// ============================================================================
// Recording Render Sink
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkWrite {
    Replace(String),
    Append(String),
}

#[derive(Default)]
pub struct RecordingSink {
    pub writes: Vec<SinkWrite>,
}

impl RecordingSink {
    /// The container's inner markup after all writes
    pub fn content(&self) -> String {
        let mut content = String::new();
        for write in &self.writes {
            match write {
                SinkWrite::Replace(markup) => content = markup.clone(),
                SinkWrite::Append(markup) => content.push_str(markup),
            }
        }
        content
    }

    pub fn replacements(&self) -> Vec<&str> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                SinkWrite::Replace(markup) => Some(markup.as_str()),
                SinkWrite::Append(_) => None,
            })
            .collect()
    }

    pub fn appended(&self) -> Vec<&str> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                SinkWrite::Append(markup) => Some(markup.as_str()),
                SinkWrite::Replace(_) => None,
            })
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn replace_inner(&mut self, markup: &str) {
        self.writes.push(SinkWrite::Replace(markup.to_string()));
    }

    fn append(&mut self, markup: &str) {
        self.writes.push(SinkWrite::Append(markup.to_string()));
    }
}

// ============================================================================
// In-Memory Host Page
// ============================================================================

pub struct InMemoryPage {
    container_id: String,
    sink: Option<RecordingSink>,
    lookups: usize,
}

impl InMemoryPage {
    /// A page with one empty container
    pub fn with_container(id: &str) -> Self {
        Self {
            container_id: id.to_string(),
            sink: Some(RecordingSink::default()),
            lookups: 0,
        }
    }

    /// A page without any container
    pub fn without_container() -> Self {
        Self {
            container_id: String::new(),
            sink: None,
            lookups: 0,
        }
    }

    pub fn sink(&self) -> Option<&RecordingSink> {
        self.sink.as_ref()
    }

    /// Number of container lookups so far
    pub fn lookups(&self) -> usize {
        self.lookups
    }
}

impl HostPage for InMemoryPage {
    fn container(&mut self, id: &str) -> Option<&mut dyn RenderSink> {
        self.lookups += 1;
        if id != self.container_id {
            return None;
        }
        self.sink.as_mut().map(|sink| sink as &mut dyn RenderSink)
    }
}

// ============================================================================
// Stub HTTP Server
// ============================================================================

/// Serve exactly one canned HTTP response on a loopback port. Returns the
/// base URL and a receiver for the request line the client sent.
pub async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let request = String::from_utf8_lossy(&request);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (format!("http://{}", addr), rx)
}

// ============================================================================
// Log Capture
// ============================================================================

/// Formatted tracing output collected in memory
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Route events on the current thread into this buffer until the guard
    /// is dropped. `#[tokio::test]` runs on a single thread, so async code
    /// under test is covered.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
