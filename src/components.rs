use crate::models::{MedicationEntry, Notification, SymptomEntry};
use crate::screens::WelcomeState;
use crate::selection::Toggle;
use crate::ui::escape;

pub const SYMPTOM_ACCENT: &str = "#CD5C5C";

/// Two-state button. Following the link flips this control and nothing else.
pub fn toggle_button(value: &str, label: &str, toggle: Toggle, href: &str, accent: Option<&str>) -> String {
    let style = accent
        .map(|color| format!(r#" style="--accent: {}""#, escape(color)))
        .unwrap_or_default();

    format!(
        r#"<a class="{class}" role="button" href="{href}" data-toggle="{value}" data-selected="{selected}" aria-pressed="{selected}"{style}>{label}</a>"#,
        class = toggle.emphasis().class(),
        value = escape(value),
        selected = toggle.selected(),
        label = escape(label),
    )
}

pub fn symptom_panel(symptoms: &[SymptomEntry], state: &WelcomeState) -> String {
    let toggles: String = symptoms
        .iter()
        .map(|symptom| {
            let next = state.with_symptoms(state.symptoms.toggled(&symptom.value));
            toggle_button(
                &symptom.value,
                &symptom.label,
                state.symptoms.toggle_for(&symptom.value),
                &next.href(),
                Some(SYMPTOM_ACCENT),
            )
        })
        .collect();

    format!(
        r#"<section class="panel" data-panel="symptoms">
      <h4>Did you have any of these symptoms today?</h4>
      <div class="toggles">{toggles}</div>
      {custom}
      <div class="notes">
        <h4>Additional Notes</h4>
        <textarea name="notes" placeholder="Today I felt..."></textarea>
      </div>
      <button type="button" class="submit">Submit</button>
    </section>"#,
        custom = custom_symptoms(state),
    )
}

/// Free-text multi-select. Adding goes through a GET form, removing through a chip link.
fn custom_symptoms(state: &WelcomeState) -> String {
    let chips: String = state
        .custom
        .iter()
        .map(|value| {
            let next = state.with_custom(state.custom.without(value));
            format!(
                r#"<span class="chip" data-custom="{value}">{value}<a href="{href}" aria-label="Remove {value}">&times;</a></span>"#,
                value = escape(value),
                href = next.href(),
            )
        })
        .collect();

    let hidden: String = [
        ("symptoms", state.symptoms.to_query()),
        ("meds", state.medication.to_query()),
        ("custom", state.custom.to_query()),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(name, value)| format!(r#"<input type="hidden" name="{name}" value="{}" />"#, escape(value)))
    .collect();

    format!(
        r#"<div class="custom-symptoms">
        <h4>Other symptoms</h4>
        <div class="chips">{chips}</div>
        <form class="inline-form" method="get" action="/">
          {hidden}
          <input type="text" name="add" placeholder="Add a symptom" />
          <button type="submit">Add</button>
        </form>
      </div>"#
    )
}

pub fn medication_panel(
    medication: &[MedicationEntry],
    notifications: &[Notification],
    state: &WelcomeState,
) -> String {
    let toggles: String = medication
        .iter()
        .map(|med| {
            let next = state.with_medication(state.medication.toggled(&med.value));
            toggle_button(
                &med.value,
                &med.label,
                state.medication.toggle_for(&med.value),
                &next.href(),
                None,
            )
        })
        .collect();

    format!(
        r#"<section class="panel" data-panel="medication">
      <h4>Have you taken your daily medication?</h4>
      {notices}
      <div class="toggles">{toggles}</div>
    </section>"#,
        notices = notice_strip(notifications),
    )
}

fn notice_strip(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return String::new();
    }

    let notices: String = notifications
        .iter()
        .map(|notice| {
            format!(
                r#"<div class="notice" role="status"><strong>{}</strong><span>{}</span></div>"#,
                escape(&notice.title),
                escape(&notice.caption)
            )
        })
        .collect();

    format!(r#"<div class="notices">{notices}</div>"#)
}
