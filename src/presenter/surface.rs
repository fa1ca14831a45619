/// The page elements the presenter drives.
///
/// Implementations own their interior mutability; every method takes `&self`
/// so the surface can be shared with the presenter behind an `Arc`.
pub trait UiSurface: Send + Sync {
    fn symptoms_value(&self) -> String;
    fn age_value(&self) -> String;
    fn body_type_value(&self) -> String;

    fn clear_result(&self);
    fn set_result_html(&self, html: &str);
    fn show_result(&self);
    fn hide_result(&self);

    fn show_loading(&self);
    fn hide_loading(&self);

    /// Blocking notification to the user.
    fn alert(&self, message: &str);

    fn disable_symptoms_input(&self);
    fn disable_submit(&self);
    fn set_symptoms_placeholder(&self, placeholder: &str);
    fn mark_submit_disabled(&self);
}
