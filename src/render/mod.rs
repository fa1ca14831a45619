//! Markup for the result region.
//!
//! Every server-supplied string goes through askama's HTML escaper, so a
//! response can never inject markup into the page.

mod templates;

use crate::{
    Result,
    protocol::{AnalysisResponse, Diagnosis, EmergencyReport, UnknownResult},
};
use askama::Template;
use templates::{DiagnosisTemplate, EmergencyTemplate, UnknownTemplate};

pub fn render_emergency(report: &EmergencyReport) -> Result<String> {
    let template = EmergencyTemplate {
        message: &report.message,
        flagged: report.emergencies.join(", "),
    };
    Ok(template.render()?)
}

pub fn render_diagnosis(diagnosis: &Diagnosis) -> Result<String> {
    let template = DiagnosisTemplate {
        condition: &diagnosis.condition,
        severity_label: diagnosis.severity.label(),
        severity_class: diagnosis.severity.css_class(),
        remedies: &diagnosis.remedies,
    };
    Ok(template.render()?)
}

pub fn render_unknown(result: &UnknownResult) -> Result<String> {
    let template = UnknownTemplate {
        message: &result.message,
    };
    Ok(template.render()?)
}

pub fn render(response: &AnalysisResponse) -> Result<String> {
    match response {
        AnalysisResponse::Emergency(report) => render_emergency(report),
        AnalysisResponse::Diagnosis(diagnosis) => render_diagnosis(diagnosis),
        AnalysisResponse::Unknown(result) => render_unknown(result),
    }
}
