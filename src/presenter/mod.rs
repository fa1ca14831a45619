pub mod session;
mod surface;

pub use session::{SessionEvent, SessionState, SessionStateMachine};
pub use surface::UiSurface;

use crate::{
    Error, Result,
    client::AnalysisClient,
    protocol::{AnalysisRequest, AnalysisResponse},
    render,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use tracing::{debug, error, info, warn};

pub const EMPTY_SYMPTOMS_ALERT: &str = "Please enter at least one symptom.";
pub const ANALYSIS_FAILED_ALERT: &str =
    "An error occurred while analyzing symptoms. Please try again.";
pub const LOCKDOWN_PLACEHOLDER: &str = "SYSTEM LOCKED - Seek Medical Help";

/// Which result template a submission ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Emergency { locked: bool },
    Diagnosis,
    Unknown,
}

pub struct ResultPresenter {
    client: Arc<dyn AnalysisClient>,
    surface: Arc<dyn UiSurface>,
    session: Mutex<SessionStateMachine>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the submission ends, on every path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ResultPresenter {
    pub fn new(client: Arc<dyn AnalysisClient>, surface: Arc<dyn UiSurface>) -> Self {
        Self {
            client,
            surface,
            session: Mutex::new(SessionStateMachine::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        self.session
            .lock()
            .map(|session| session.current_state())
            .unwrap_or(SessionState::Locked)
    }

    pub fn is_locked(&self) -> bool {
        self.session
            .lock()
            .map(|session| session.is_locked())
            .unwrap_or(true)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Key press on the symptom input. Only Enter submits.
    pub async fn handle_key(&self, key: &str) -> Result<Option<Outcome>> {
        if key != "Enter" {
            return Ok(None);
        }
        self.submit_form().await.map(Some)
    }

    /// Submit control: reads the current form values from the surface.
    pub async fn submit_form(&self) -> Result<Outcome> {
        let symptoms = self.surface.symptoms_value();
        let age = self.surface.age_value();
        let body_type = self.surface.body_type_value();
        self.submit(&symptoms, &age, &body_type).await
    }

    pub async fn submit(&self, symptoms: &str, age: &str, body_type: &str) -> Result<Outcome> {
        if self.is_locked() {
            warn!("Submission rejected: session is locked");
            return Err(Error::Locked);
        }

        let request = match AnalysisRequest::new(symptoms, age, body_type) {
            Ok(request) => request,
            Err(e) => {
                debug!("Submission rejected: {}", e);
                self.surface.alert(EMPTY_SYMPTOMS_ALERT);
                return Err(e);
            }
        };

        let _guard = self.acquire_flight()?;

        self.surface.clear_result();
        self.surface.hide_result();
        self.surface.show_loading();

        info!("Submitting symptoms for analysis");
        let rendered = self
            .client
            .analyze(&request)
            .await
            .and_then(|response| render::render(&response).map(|html| (response, html)));

        let (response, html) = match rendered {
            Ok(rendered) => rendered,
            Err(e) => {
                error!("Symptom analysis failed: {}", e);
                self.surface.hide_loading();
                self.surface.alert(ANALYSIS_FAILED_ALERT);
                return Err(e);
            }
        };

        self.surface.hide_loading();
        self.surface.show_result();
        self.surface.set_result_html(&html);

        let outcome = match response {
            AnalysisResponse::Emergency(report) => {
                warn!(
                    "Emergency result: {} high-risk symptom(s) flagged",
                    report.emergencies.len()
                );
                if report.lockdown {
                    self.lock_down()?;
                }
                Outcome::Emergency {
                    locked: report.lockdown,
                }
            }
            AnalysisResponse::Diagnosis(diagnosis) => {
                info!(
                    "Diagnosis result: {} ({})",
                    diagnosis.condition,
                    diagnosis.severity.tier()
                );
                Outcome::Diagnosis
            }
            AnalysisResponse::Unknown(result) => {
                info!("Fallback result for status {:?}", result.status);
                Outcome::Unknown
            }
        };

        Ok(outcome)
    }

    fn acquire_flight(&self) -> Result<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                warn!("Submission rejected: a request is already in flight");
                Error::RequestInFlight
            })?;
        Ok(InFlightGuard(&self.in_flight))
    }

    fn lock_down(&self) -> Result<()> {
        self.session
            .lock()
            .map_err(|_| Error::internal("session state poisoned"))?
            .transition(SessionEvent::LockdownRequested)?;

        self.surface.disable_symptoms_input();
        self.surface.disable_submit();
        self.surface.set_symptoms_placeholder(LOCKDOWN_PLACEHOLDER);
        self.surface.mark_submit_disabled();
        info!("Session locked down after emergency result");
        Ok(())
    }
}
