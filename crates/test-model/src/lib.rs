//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use calc_agent_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelReply, ModelRequest,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Clone)]
enum ScriptStep {
    Reply(PresetReply),
    Failure(ErrorKind),
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the conversation script,
/// which is how the model should respond to each request. Steps are
/// consumed in order, one per request, and running out of steps makes
/// the request fail. Clones share the same script and request log, so
/// keep a clone around when you want to inspect the requests an agent
/// has sent.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Arc<Mutex<VecDeque<ScriptStep>>>,
    requests: Arc<Mutex<Vec<ModelRequest>>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_reply(&mut self, preset: PresetReply) {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptStep::Reply(preset));
    }

    #[inline]
    pub fn add_failure(&mut self, kind: ErrorKind) {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptStep::Failure(kind));
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns every request received so far, in order.
    #[inline]
    pub fn recorded_requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ModelProvider for TestModelProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, Self::Error>> + Send + 'static
    {
        self.requests.lock().unwrap().push(req.clone());
        let step = self.script.lock().unwrap().pop_front();
        let delay = self.delay.unwrap_or(Duration::from_millis(1));
        async move {
            sleep(delay).await;
            match step {
                None => Err(Error {
                    message: "no more scripted steps",
                    kind: ErrorKind::Other,
                }),
                Some(ScriptStep::Failure(kind)) => Err(Error {
                    message: "scripted failure",
                    kind,
                }),
                Some(ScriptStep::Reply(preset)) => Ok(preset.into_reply()),
            }
        }
    }
}
