use crate::calendar::{self, CalendarState};
use crate::components::{medication_panel, symptom_panel};
use crate::models::{Fixtures, FrequencyDataset, Profile, UploadSpec};
use crate::routes::Screen;
use crate::selection::Selection;
use crate::ui::{escape, href, url};
use chrono::{Datelike, NaiveDate};

/// Per-visit state of the welcome screen, carried in its query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WelcomeState {
    pub symptoms: Selection,
    pub medication: Selection,
    pub custom: Selection,
}

impl WelcomeState {
    pub fn with_symptoms(&self, symptoms: Selection) -> Self {
        Self {
            symptoms,
            ..self.clone()
        }
    }

    pub fn with_medication(&self, medication: Selection) -> Self {
        Self {
            medication,
            ..self.clone()
        }
    }

    pub fn with_custom(&self, custom: Selection) -> Self {
        Self {
            custom,
            ..self.clone()
        }
    }

    pub fn href(&self) -> String {
        escape(&self.url())
    }

    pub fn url(&self) -> String {
        url(
            Screen::Welcome.path(),
            &[
                ("symptoms", self.symptoms.to_query()),
                ("meds", self.medication.to_query()),
                ("custom", self.custom.to_query()),
            ],
        )
    }
}

pub fn welcome(name: &str, fixtures: &Fixtures, state: &WelcomeState) -> String {
    format!(
        r#"<section class="screen" data-screen="welcome">
    <h1>Welcome Back, {name}!</h1>
    {medication}
    {symptoms}
  </section>"#,
        name = escape(name),
        medication = medication_panel(&fixtures.medication, &fixtures.notifications, state),
        symptoms = symptom_panel(&fixtures.symptoms, state),
    )
}

pub fn profile(profile: &Profile, upload: &UploadSpec) -> String {
    let details = &profile.details;
    let history = lines(&profile.medical_history);
    let medication = lines(&profile.current_medication);
    let doctors: String = profile
        .doctors
        .iter()
        .map(|doctor| {
            format!(
                "<h6>{}</h6><p>Number: {}</p><p>Clinic: {}</p>",
                escape(&doctor.name),
                escape(&doctor.number),
                escape(&doctor.clinic)
            )
        })
        .collect();

    format!(
        r#"<section class="screen" data-screen="profile">
    <h2>{name}</h2>
    {uploader}
    <div class="panel details">
      <h4>PERSONAL DETAILS</h4>
      <p>Full name: {full_name}</p>
      <p>Age: {age}</p>
      <p>Sex: {sex}</p>
      <p>Email: {email}</p>
      <p>Phone: {phone}</p>
    </div>
    <div class="panel details">
      <h4>MEDICAL HISTORY</h4>
      {history}
    </div>
    <div class="panel details">
      <h4>CURRENT MEDICATION</h4>
      {medication}
    </div>
    <div class="panel details">
      <h4>DOCTOR CONTACT DETAILS</h4>
      {doctors}
    </div>
  </section>"#,
        name = escape(&profile.name),
        uploader = file_uploader(upload),
        full_name = escape(&details.full_name),
        age = details.age,
        sex = escape(&details.sex),
        email = escape(&details.email),
        phone = escape(&details.phone),
    )
}

// Upload control only; nothing receives the file.
fn file_uploader(upload: &UploadSpec) -> String {
    format!(
        r#"<div class="panel uploader">
      <strong>{title}</strong>
      <span class="subtitle">{description}</span>
      <label><input type="file" name="files" accept="{accept}" multiple /> {button}</label>
    </div>"#,
        title = escape(&upload.label_title),
        description = escape(&upload.label_description),
        accept = escape(&upload.accept.join(",")),
        button = escape(&upload.button_label),
    )
}

fn lines(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<p>{}</p>", escape(item)))
        .collect()
}

pub fn calendar_screen(state: &CalendarState, today: NaiveDate, datasets: &[FrequencyDataset]) -> String {
    let summary = datasets
        .first()
        .map(frequency_table)
        .unwrap_or_default();

    let modal = if state.modal_open {
        datasets
            .get(state.dataset)
            .map(|dataset| detail_modal(state, dataset))
            .unwrap_or_default()
    } else {
        String::new()
    };

    format!(
        r#"<section class="screen" data-screen="calendar">
    <h2>History</h2>
    <p class="subtitle">Selected date: <span id="selected-date">{selected}</span></p>
    {picker}
    <div class="panel">
      <h4>Symptom frequency</h4>
      {summary}
    </div>
    {modal}
  </section>"#,
        selected = display_date(state.selected),
        picker = date_picker(state, today),
    )
}

fn date_picker(state: &CalendarState, today: NaiveDate) -> String {
    let month_link = |month: NaiveDate| {
        href(
            Screen::Calendar.path(),
            &[
                ("month", calendar::month_key(month)),
                ("date", state.selected.to_string()),
                ("modal", "closed".to_string()),
            ],
        )
    };

    let rows: String = calendar::month_grid(state.month)
        .iter()
        .map(|week| {
            let cells: String = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => {
                        let mut class = String::from("day");
                        if *day == today {
                            class.push_str(" today");
                        }
                        if *day == state.selected {
                            class.push_str(" selected");
                        }
                        format!(
                            r#"<td><a class="{class}" href="{href}" data-date="{day}">{number}</a></td>"#,
                            href = href(Screen::Calendar.path(), &[("date", day.to_string())]),
                            number = day.day(),
                        )
                    }
                    None => "<td></td>".to_string(),
                })
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!(
        r#"<div class="panel calendar">
      <div class="calendar-header">
        <a href="{prev}" aria-label="Previous month">&lsaquo;</a>
        <strong id="calendar-month">{title}</strong>
        <a href="{next}" aria-label="Next month">&rsaquo;</a>
      </div>
      <table>
        <thead><tr><th>Mon</th><th>Tue</th><th>Wed</th><th>Thu</th><th>Fri</th><th>Sat</th><th>Sun</th></tr></thead>
        <tbody>{rows}</tbody>
      </table>
    </div>"#,
        prev = month_link(calendar::previous_month(state.month)),
        next = month_link(calendar::next_month(state.month)),
        title = state.month.format("%B %Y"),
    )
}

fn frequency_table(dataset: &FrequencyDataset) -> String {
    let rows: String = dataset
        .rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape(&row.symptom),
                row.occurrences
            )
        })
        .collect();

    format!(
        r#"<table class="frequency" data-dataset="{name}"><thead><tr><th>Symptom</th><th>Occurrences</th></tr></thead><tbody>{rows}</tbody></table>"#,
        name = escape(&dataset.name),
    )
}

fn detail_modal(state: &CalendarState, dataset: &FrequencyDataset) -> String {
    let close = href(
        Screen::Calendar.path(),
        &[
            ("date", state.selected.to_string()),
            ("month", calendar::month_key(state.month)),
            ("modal", "closed".to_string()),
        ],
    );

    format!(
        r#"<div class="modal-backdrop">
      <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title">
        <a class="close" href="{close}">Close</a>
        <h4 id="modal-title">Symptoms on {date}</h4>
        {table}
      </div>
    </div>"#,
        date = display_date(state.selected),
        table = frequency_table(dataset),
    )
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}
