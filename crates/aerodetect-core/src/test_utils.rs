//! Test utilities for aerodetect-core.
//!
//! Shared fixtures for unit tests: file builders and a scripted
//! [`PredictionBackend`]. Only compiled when running tests.

use crate::backend::PredictionBackend;
use crate::error::PredictionError;
use crate::media::SelectedFile;
use crate::protocol::BackendReply;
use std::cell::RefCell;
use url::Url;

pub fn image(name: &str) -> SelectedFile {
    SelectedFile::new(name, "image/png", name.as_bytes().to_vec())
}

pub fn video(name: &str) -> SelectedFile {
    SelectedFile::new(name, "video/mp4", name.as_bytes().to_vec())
}

pub fn text(name: &str) -> SelectedFile {
    SelectedFile::new(name, "text/plain", name.as_bytes().to_vec())
}

/// A request the mock received, by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Video(String),
    Images(Vec<String>),
}

/// Backend returning scripted replies and recording every call.
pub struct MockBackend {
    origin: Url,
    video_reply: Result<BackendReply, PredictionError>,
    images_reply: Result<BackendReply, PredictionError>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockBackend {
    pub fn new() -> Self {
        let unscripted = Err(PredictionError::Unavailable("no reply scripted".to_string()));
        Self {
            origin: Url::parse("http://detector.test").expect("static URL"),
            video_reply: unscripted.clone(),
            images_reply: unscripted,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_video_reply(mut self, reply: BackendReply) -> Self {
        self.video_reply = Ok(reply);
        self
    }

    pub fn with_images_reply(mut self, reply: BackendReply) -> Self {
        self.images_reply = Ok(reply);
        self
    }

    pub fn with_images_error(mut self, error: PredictionError) -> Self {
        self.images_reply = Err(error);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl PredictionBackend for MockBackend {
    async fn predict_video(&self, video: &SelectedFile) -> Result<BackendReply, PredictionError> {
        self.calls
            .borrow_mut()
            .push(MockCall::Video(video.name.clone()));
        self.video_reply.clone()
    }

    async fn predict_images(
        &self,
        images: &[SelectedFile],
    ) -> Result<BackendReply, PredictionError> {
        self.calls.borrow_mut().push(MockCall::Images(
            images.iter().map(|f| f.name.clone()).collect(),
        ));
        self.images_reply.clone()
    }

    fn origin(&self) -> &Url {
        &self.origin
    }
}
