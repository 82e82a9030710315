//! Scripted transport shared by the client and flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport};

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push_reply(status, body);
        transport
    }

    pub fn failing(error: ApiError) -> Self {
        let transport = Self::default();
        transport.replies.borrow_mut().push_back(Err(error));
        transport
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}
