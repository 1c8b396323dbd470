//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::clients::{HttpError, HttpRequest, HttpResponse, Transport};
use crate::config::{AccessToken, EcwidConfig, StoreId};

pub fn test_config() -> EcwidConfig {
    EcwidConfig::builder()
        .store_id(StoreId::new("1003").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .build()
        .unwrap()
}

/// Replays queued responses in order and records every request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub fn push_ok(&self, body: Value) {
        self.push(HttpResponse::new(200, "scripted", body));
    }

    pub fn push_err(&self, error: HttpError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for {path}"))
            .map(|mut response| {
                response.url = path;
                response
            })
    }
}
