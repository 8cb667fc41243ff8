//! Shared test doubles and request helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use watering_relay::relay::{Relay, RelayError};

// ── Relay call record ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayCall {
    On,
    Off,
}

/// Relay double that records every command and can be told to fail.
#[derive(Clone, Default)]
pub struct ScriptedRelay {
    pub calls: Arc<Mutex<Vec<RelayCall>>>,
    pub fail_on: bool,
    pub fail_off: bool,
}

impl ScriptedRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on() -> Self {
        Self { fail_on: true, ..Self::default() }
    }

    pub fn failing_off() -> Self {
        Self { fail_off: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<RelayCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Relay for ScriptedRelay {
    fn on(&mut self) -> Result<(), RelayError> {
        self.calls.lock().unwrap().push(RelayCall::On);
        if self.fail_on {
            return Err(RelayError::Driver("line stuck".to_string()));
        }
        Ok(())
    }

    fn off(&mut self) -> Result<(), RelayError> {
        self.calls.lock().unwrap().push(RelayCall::Off);
        if self.fail_off {
            return Err(RelayError::Driver("line stuck".to_string()));
        }
        Ok(())
    }
}

// ── Request helpers ───────────────────────────────────────────

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}
