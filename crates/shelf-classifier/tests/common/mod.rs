#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use shelf_classifier::{ChatRequest, ExemplarSet, InferenceClient};

/// Scratch directory removed on drop
pub struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("shelf-classifier-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, bytes).expect("write scratch file");
        path
    }

    /// Writes three distinct exemplar files under their standard names
    pub fn exemplars(&self) -> ExemplarSet {
        self.write("Organizado.jpg", b"\xFF\xD8\xFF organized");
        self.write("Intermedio.jpg", b"\xFF\xD8\xFF partial");
        self.write("Desorganizado.jpg", b"\xFF\xD8\xFF disorganized");
        ExemplarSet::from_dir(&self.dir)
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

#[derive(Debug, thiserror::Error)]
#[error("stub failure: {0}")]
pub struct StubError(pub String);

/// Inference client that records calls and answers with a canned reply
#[derive(Debug, Default)]
pub struct StubClient {
    reply: Option<String>,
    calls: AtomicUsize,
    last_request: std::sync::Mutex<Option<ChatRequest>>,
}

impl StubClient {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().expect("lock").clone()
    }
}

impl InferenceClient for StubClient {
    type Error = StubError;

    async fn infer(&self, request: ChatRequest) -> Result<String, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("lock") = Some(request);
        self.reply
            .clone()
            .ok_or_else(|| StubError("quota exceeded".to_string()))
    }
}
