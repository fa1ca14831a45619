use async_trait::async_trait;
use serde_json::Value;
use sprout_presenter::{
    Result,
    client::AnalysisClient,
    presenter::UiSurface,
    protocol::{AnalysisRequest, AnalysisResponse},
};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// What the mock client answers with for one call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    MalformedBody(String),
}

/// Mock analysis client for testing
#[derive(Debug, Default)]
pub struct MockAnalysisClient {
    pub replies: Arc<Mutex<Vec<MockReply>>>,
    pub requests: Arc<Mutex<Vec<AnalysisRequest>>>,
    pub gate: Option<Arc<Notify>>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, body: Value) -> Self {
        self.replies.lock().unwrap().push(MockReply::Json(body));
        self
    }

    pub fn with_malformed_body(self, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::MalformedBody(body.to_string()));
        self
    }

    /// Every call waits for a `notify_one` on the gate before answering.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn get_requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisClient for MockAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            assert!(!replies.is_empty(), "No more mock replies available");
            replies.remove(0)
        };

        match reply {
            MockReply::Json(body) => AnalysisResponse::from_value(body),
            MockReply::MalformedBody(body) => {
                let value: Value = serde_json::from_str(&body)?;
                AnalysisResponse::from_value(value)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiCall {
    ClearResult,
    SetResultHtml(String),
    ShowResult,
    HideResult,
    ShowLoading,
    HideLoading,
    Alert(String),
    DisableSymptomsInput,
    DisableSubmit,
    SetPlaceholder(String),
    MarkSubmitDisabled,
}

#[derive(Debug, Default)]
struct SurfaceState {
    symptoms: String,
    age: String,
    body_type: String,
    result_html: String,
    result_visible: bool,
    loading_visible: bool,
    input_disabled: bool,
    submit_disabled: bool,
    placeholder: String,
    calls: Vec<UiCall>,
}

/// Surface that records every call and tracks the resulting element state.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    state: Mutex<SurfaceState>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(symptoms: &str, age: &str, body_type: &str) -> Self {
        let surface = Self::new();
        surface.set_symptoms(symptoms);
        {
            let mut state = surface.state.lock().unwrap();
            state.age = age.to_string();
            state.body_type = body_type.to_string();
        }
        surface
    }

    pub fn set_symptoms(&self, symptoms: &str) {
        self.state.lock().unwrap().symptoms = symptoms.to_string();
    }

    /// Seeds a stale result region, as left by an earlier render.
    pub fn seed_result(&self, html: &str) {
        let mut state = self.state.lock().unwrap();
        state.result_html = html.to_string();
        state.result_visible = true;
    }

    pub fn calls(&self) -> Vec<UiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                UiCall::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn result_html(&self) -> String {
        self.state.lock().unwrap().result_html.clone()
    }

    pub fn result_visible(&self) -> bool {
        self.state.lock().unwrap().result_visible
    }

    pub fn loading_visible(&self) -> bool {
        self.state.lock().unwrap().loading_visible
    }

    pub fn input_disabled(&self) -> bool {
        self.state.lock().unwrap().input_disabled
    }

    pub fn submit_disabled(&self) -> bool {
        self.state.lock().unwrap().submit_disabled
    }

    pub fn placeholder(&self) -> String {
        self.state.lock().unwrap().placeholder.clone()
    }

    fn record(&self, call: UiCall, apply: impl FnOnce(&mut SurfaceState)) {
        let mut state = self.state.lock().unwrap();
        apply(&mut state);
        state.calls.push(call);
    }
}

impl UiSurface for RecordingSurface {
    fn symptoms_value(&self) -> String {
        self.state.lock().unwrap().symptoms.clone()
    }

    fn age_value(&self) -> String {
        self.state.lock().unwrap().age.clone()
    }

    fn body_type_value(&self) -> String {
        self.state.lock().unwrap().body_type.clone()
    }

    fn clear_result(&self) {
        self.record(UiCall::ClearResult, |s| s.result_html.clear());
    }

    fn set_result_html(&self, html: &str) {
        self.record(UiCall::SetResultHtml(html.to_string()), |s| {
            s.result_html = html.to_string()
        });
    }

    fn show_result(&self) {
        self.record(UiCall::ShowResult, |s| s.result_visible = true);
    }

    fn hide_result(&self) {
        self.record(UiCall::HideResult, |s| s.result_visible = false);
    }

    fn show_loading(&self) {
        self.record(UiCall::ShowLoading, |s| s.loading_visible = true);
    }

    fn hide_loading(&self) {
        self.record(UiCall::HideLoading, |s| s.loading_visible = false);
    }

    fn alert(&self, message: &str) {
        self.record(UiCall::Alert(message.to_string()), |_| {});
    }

    fn disable_symptoms_input(&self) {
        self.record(UiCall::DisableSymptomsInput, |s| s.input_disabled = true);
    }

    fn disable_submit(&self) {
        self.record(UiCall::DisableSubmit, |s| s.submit_disabled = true);
    }

    fn set_symptoms_placeholder(&self, placeholder: &str) {
        self.record(UiCall::SetPlaceholder(placeholder.to_string()), |s| {
            s.placeholder = placeholder.to_string()
        });
    }

    fn mark_submit_disabled(&self) {
        self.record(UiCall::MarkSubmitDisabled, |_| {});
    }
}
