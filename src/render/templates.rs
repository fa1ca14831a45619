use crate::protocol::Remedy;
use askama::Template;

#[derive(Template)]
#[template(
    source = r#"<div class="card emergency">
    <h3 class="emergency-title">⚠️ EMERGENCY ALERT</h3>
    <p>{{ message }}</p>
    <p><strong>Detected High-Risk Symptoms:</strong> {{ flagged }}</p>
</div>"#,
    ext = "html"
)]
pub(super) struct EmergencyTemplate<'a> {
    pub message: &'a str,
    pub flagged: String,
}

#[derive(Template)]
#[template(
    source = r#"<div class="card">
    <div style="display: flex; align-items: center; justify-content: space-between;">
        <span class="condition-title">{{ condition }}</span>
        <span class="badge {{ severity_class }}">{{ severity_label }}</span>
    </div>
    <h4 style="margin-top: 1.5rem; color: #555;">Recommended Natural Remedies</h4>
    <ul class="remedies-list">
    {%- for remedy in remedies %}
        <li>
            <strong>{{ remedy.name }}</strong><br>
            <small>{{ remedy.explanation }}</small>
        </li>
    {%- endfor %}
    </ul>
</div>"#,
    ext = "html"
)]
pub(super) struct DiagnosisTemplate<'a> {
    pub condition: &'a str,
    pub severity_label: &'a str,
    pub severity_class: String,
    pub remedies: &'a [Remedy],
}

#[derive(Template)]
#[template(
    source = r#"<div class="card">
    <h3 style="color: #666;">Analysis Result</h3>
    <p>{{ message }}</p>
</div>"#,
    ext = "html"
)]
pub(super) struct UnknownTemplate<'a> {
    pub message: &'a str,
}
