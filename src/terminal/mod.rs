use crate::presenter::UiSurface;
use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicBool, Ordering},
};

pub const DEFAULT_PLACEHOLDER: &str = "e.g. fever, cough, runny nose";

#[derive(Debug, Default)]
struct Form {
    symptoms: String,
    age: String,
    body_type: String,
    placeholder: String,
}

/// Line-oriented surface: the result region goes to stdout, everything else to stderr.
#[derive(Debug)]
pub struct TerminalSurface {
    form: Mutex<Form>,
    result: Mutex<String>,
    result_visible: AtomicBool,
    input_disabled: AtomicBool,
    submit_disabled: AtomicBool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            form: Mutex::new(Form {
                placeholder: DEFAULT_PLACEHOLDER.to_string(),
                ..Form::default()
            }),
            result: Mutex::new(String::new()),
            result_visible: AtomicBool::new(false),
            input_disabled: AtomicBool::new(false),
            submit_disabled: AtomicBool::new(false),
        }
    }

    fn form(&self) -> MutexGuard<'_, Form> {
        // A poisoned form still holds plain strings.
        self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_profile(&self, age: &str, body_type: &str) {
        let mut form = self.form();
        form.age = age.trim().to_string();
        form.body_type = body_type.trim().to_string();
    }

    /// Types a line into the symptom input. Ignored once the input is disabled.
    pub fn type_symptoms(&self, text: &str) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.form().symptoms = text.to_string();
        true
    }

    pub fn accepts_input(&self) -> bool {
        !self.input_disabled.load(Ordering::Acquire) && !self.submit_disabled.load(Ordering::Acquire)
    }

    pub fn placeholder(&self) -> String {
        self.form().placeholder.clone()
    }

    pub fn result_html(&self) -> String {
        self.result
            .lock()
            .map(|result| result.clone())
            .unwrap_or_default()
    }

    pub fn is_result_visible(&self) -> bool {
        self.result_visible.load(Ordering::Acquire)
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSurface for TerminalSurface {
    fn symptoms_value(&self) -> String {
        self.form().symptoms.clone()
    }

    fn age_value(&self) -> String {
        self.form().age.clone()
    }

    fn body_type_value(&self) -> String {
        self.form().body_type.clone()
    }

    fn clear_result(&self) {
        if let Ok(mut result) = self.result.lock() {
            result.clear();
        }
    }

    fn set_result_html(&self, html: &str) {
        if let Ok(mut result) = self.result.lock() {
            *result = html.to_string();
        }
        if self.is_result_visible() {
            println!("{}", html);
        }
    }

    fn show_result(&self) {
        self.result_visible.store(true, Ordering::Release);
    }

    fn hide_result(&self) {
        self.result_visible.store(false, Ordering::Release);
    }

    fn show_loading(&self) {
        eprintln!("Analyzing symptoms...");
    }

    fn hide_loading(&self) {}

    fn alert(&self, message: &str) {
        eprintln!("[!] {}", message);
    }

    fn disable_symptoms_input(&self) {
        self.input_disabled.store(true, Ordering::Release);
    }

    fn disable_submit(&self) {
        self.submit_disabled.store(true, Ordering::Release);
    }

    fn set_symptoms_placeholder(&self, placeholder: &str) {
        self.form().placeholder = placeholder.to_string();
    }

    fn mark_submit_disabled(&self) {
        eprintln!("[submit disabled]");
    }
}
