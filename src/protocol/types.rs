use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use std::fmt;

/// Payload sent to the analysis endpoint.
///
/// The symptom text is always trimmed and never empty; use [`AnalysisRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    symptoms: String,
    profile: Profile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub age: String,
    pub body_type: String,
}

impl AnalysisRequest {
    pub fn new(
        symptoms: &str,
        age: impl Into<String>,
        body_type: impl Into<String>,
    ) -> Result<Self> {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            return Err(Error::EmptySymptoms);
        }

        Ok(Self {
            symptoms: symptoms.to_string(),
            profile: Profile {
                age: age.into(),
                body_type: body_type.into(),
            },
        })
    }

    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

/// Result returned by the analysis endpoint, keyed by its `status` field.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResponse {
    Emergency(EmergencyReport),
    Diagnosis(Diagnosis),
    Unknown(UnknownResult),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmergencyReport {
    pub message: String,
    pub emergencies: Vec<String>,
    #[serde(default)]
    pub lockdown: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Diagnosis {
    pub condition: String,
    pub severity: Severity,
    pub remedies: Vec<Remedy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Remedy {
    pub name: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResult {
    /// Raw `status` value, `None` when the field was absent or not a string.
    pub status: Option<String>,
    pub message: String,
}

impl AnalysisResponse {
    pub fn status(&self) -> &str {
        match self {
            Self::Emergency(_) => "emergency",
            Self::Diagnosis(_) => "success",
            Self::Unknown(result) => result.status.as_deref().unwrap_or(""),
        }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let status = value.get("status").and_then(Value::as_str);

        match status {
            Some("emergency") => Ok(Self::Emergency(serde_json::from_value(value)?)),
            Some("success") => Ok(Self::Diagnosis(serde_json::from_value(value)?)),
            _ => Ok(Self::Unknown(UnknownResult {
                status: status.map(str::to_string),
                message: match value.get("message") {
                    Some(Value::String(message)) => message.clone(),
                    Some(Value::Null) | None => String::new(),
                    Some(other) => other.to_string(),
                },
            })),
        }
    }
}

impl<'de> Deserialize<'de> for AnalysisResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

/// Display tier of a severity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    Low,
    Mild,
    Moderate,
    High,
    Severe,
    Critical,
    Unknown,
}

impl SeverityTier {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "mild" => Self::Mild,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            "severe" => Self::Severe,
            "critical" => Self::Critical,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity as reported by the server: the verbatim label plus its tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Severity {
    label: String,
    tier: SeverityTier,
}

impl Severity {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let tier = SeverityTier::from_label(&label);
        Self { label, tier }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tier(&self) -> SeverityTier {
        self.tier
    }

    /// CSS class of the severity badge: the lowercased label restricted to `[a-z0-9-]`.
    pub fn css_class(&self) -> String {
        let slug: String = self
            .label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();

        if slug.is_empty() {
            format!("severity-{}", SeverityTier::Unknown)
        } else {
            format!("severity-{}", slug)
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
