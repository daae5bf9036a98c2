use std::cell::Cell;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::SubmitError;
use crate::request::Endpoint;
use crate::response::ReplyEnvelope;

/// Status and raw body of an HTTP reply.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body to one of the prediction endpoints.
#[allow(async_fn_in_trait)]
pub trait PredictionTransport {
    async fn post_json(&self, endpoint: Endpoint, body: String) -> Result<HttpReply, SubmitError>;
}

/// The page surface a submission drives.
pub trait SubmissionView {
    type Response;

    fn hide_results(&self);
    fn show_loading(&self);
    fn hide_loading(&self);
    fn render(&self, response: Self::Response);
    /// Blocking notification, e.g. `window.alert`.
    fn notify(&self, message: &str);
}

/// Shows the loading indicator and hides it again when dropped.
pub struct LoadingGuard<'a, V: SubmissionView> {
    view: &'a V,
}

impl<'a, V: SubmissionView> LoadingGuard<'a, V> {
    pub fn show(view: &'a V) -> Self {
        view.show_loading();
        Self { view }
    }
}

impl<V: SubmissionView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.hide_loading();
    }
}

/// Admits one submission at a time.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: Cell<Option<Uuid>>,
}

pub struct SubmissionTicket<'a> {
    gate: &'a SubmissionGate,
    pub id: Uuid,
}

impl SubmissionGate {
    pub fn try_acquire(&self) -> Option<SubmissionTicket<'_>> {
        if self.in_flight.get().is_some() {
            return None;
        }
        let id = Uuid::new_v4();
        self.in_flight.set(Some(id));
        Some(SubmissionTicket { gate: self, id })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get().is_some()
    }
}

impl Drop for SubmissionTicket<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.set(None);
    }
}

/// Runs a form submission end to end against a transport.
pub struct FormSubmitController<T> {
    transport: T,
    endpoint: Endpoint,
    gate: SubmissionGate,
}

impl<T: PredictionTransport> FormSubmitController<T> {
    pub fn new(transport: T, endpoint: Endpoint) -> Self {
        Self { transport, endpoint, gate: SubmissionGate::default() }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Builds the request, sends it and renders or reports the outcome.
    ///
    /// Returns `false` when the submission was not admitted because another
    /// one is still in flight. The loading indicator is hidden exactly once
    /// on every other path, including a failing `build`.
    pub async fn submit<V, Req, F>(&self, view: &V, build: F) -> bool
    where
        V: SubmissionView,
        V::Response: DeserializeOwned,
        Req: Serialize,
        F: FnOnce() -> Result<Req, SubmitError>,
    {
        let Some(ticket) = self.gate.try_acquire() else {
            log::warn!("Ignoring submit to {}: a request is already in flight", self.endpoint.path());
            return false;
        };

        view.hide_results();
        let _loading = LoadingGuard::show(view);

        match self.exchange::<V::Response, Req, F>(ticket.id, build).await {
            Ok(response) => view.render(response),
            Err(SubmitError::Configuration(what)) => {
                log::error!("Submission {} to {} aborted, element missing: {}", ticket.id, self.endpoint.path(), what);
            }
            Err(err) => {
                log::error!("Submission {} to {} failed: {}", ticket.id, self.endpoint.path(), err);
                view.notify(&self.notice_for(&err));
            }
        }
        true
    }

    fn notice_for(&self, err: &SubmitError) -> String {
        match (err, self.endpoint.unreachable_notice()) {
            (SubmitError::Transport(_) | SubmitError::Decode(_), Some(notice)) => notice.to_string(),
            _ => err.user_message(),
        }
    }

    async fn exchange<R, Req, F>(&self, id: Uuid, build: F) -> Result<R, SubmitError>
    where
        R: DeserializeOwned,
        Req: Serialize,
        F: FnOnce() -> Result<Req, SubmitError>,
    {
        let request = build()?;
        let body = serde_json::to_string(&request)?;
        log::info!("Submission {}: POST {}", id, self.endpoint.path());

        let reply = self.transport.post_json(self.endpoint, body).await?;
        if !reply.ok() {
            return Err(SubmitError::Network { status: reply.status });
        }
        decode_reply(self.endpoint, &reply.body)
    }
}

/// Checks the `success` flag before decoding the full payload.
pub fn decode_reply<R: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<R, SubmitError> {
    let envelope: ReplyEnvelope = serde_json::from_str(body)?;
    if !envelope.success {
        let message = envelope
            .error
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| endpoint.fallback_error().to_string());
        return Err(SubmitError::Prediction(message));
    }
    // Decoded from the text so object key order survives.
    Ok(serde_json::from_str(body)?)
}
