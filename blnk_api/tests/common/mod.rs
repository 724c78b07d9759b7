#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use blnk_api::{
    Backoff, Client, ClientOptions, Error, Logger, OutboundRequest, Transport, TransportResponse,
};

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

/// One scripted transport outcome.
#[derive(Clone)]
pub enum Step {
    /// Connection-level failure.
    Fail,
    Respond(u16, String),
}

/// Replays a script of outcomes; the last step repeats once the script runs out.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    steps: Arc<Mutex<VecDeque<Step>>>,
    last: Arc<Mutex<Option<Step>>>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<OutboundRequest>>>,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<TransportResponse, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let step = {
            let mut steps = self.steps.lock().unwrap();
            let mut last = self.last.lock().unwrap();
            if let Some(step) = steps.pop_front() {
                *last = Some(step.clone());
            }
            last.clone().expect("transport script is empty")
        };

        match step {
            Step::Fail => Err(Error::Transport("connection refused".to_string())),
            Step::Respond(status, body) => Ok(TransportResponse::new(status, body)),
        }
    }
}

/// Keeps every logged line for assertions.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("INFO {}", msg));
    }

    fn error(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("ERROR {}", msg));
    }
}

/// Client against `base_url` with near-instant backoff.
pub fn fast_client(base_url: &str, retry_count: usize) -> Client {
    let options = ClientOptions::default()
        .with_retry_count(retry_count)
        .with_backoff(Backoff::Fixed(Duration::from_millis(5)));
    Client::with_options(base_url, Some("test-key".to_string()), options).unwrap()
}

/// Client whose every call goes to `transport`.
pub fn stub_client(transport: ScriptedTransport, options: ClientOptions) -> Client {
    Client::with_options("http://ledger.test", None, options)
        .unwrap()
        .with_transport(transport)
}
