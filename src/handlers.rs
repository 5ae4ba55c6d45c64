use crate::calendar::{self, CalendarState};
use crate::errors::AppError;
use crate::models::{
    CalendarResponse, MedicationEntry, Notification, Profile, RouteInfo, SymptomEntry,
};
use crate::routes::{ROUTES, Screen};
use crate::screens::{self, WelcomeState};
use crate::selection::Selection;
use crate::state::AppState;
use crate::ui::{render_not_found, render_page};
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct ScreenQuery {
    pub symptoms: Option<String>,
    pub meds: Option<String>,
    pub custom: Option<String>,
    pub add: Option<String>,
    pub date: Option<String>,
    pub month: Option<String>,
    pub modal: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Matches the request path against the route table and renders that screen.
pub async fn screen(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(query): Query<ScreenQuery>,
) -> Result<Response, AppError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::method_not_allowed(method.as_str()));
    }

    let path = uri.path();
    if path.starts_with("/api/") {
        return Err(AppError::not_found(format!("no api resource at {path}")));
    }

    let Some(screen) = Screen::match_path(path) else {
        debug!(path, "no route matched");
        return Ok((StatusCode::NOT_FOUND, Html(render_not_found(path))).into_response());
    };

    match screen {
        Screen::Welcome => Ok(welcome(&state, &query)),
        Screen::Profile => {
            let fixtures = &state.fixtures;
            let body = screens::profile(&fixtures.profile, &fixtures.upload);
            Ok(Html(render_page("Profile", Some(Screen::Profile), &body)).into_response())
        }
        Screen::Calendar => {
            let today = calendar::today();
            let calendar = calendar_state(&state, &query, today)?;
            let body = screens::calendar_screen(&calendar, today, &state.fixtures.frequency_sets);
            Ok(Html(render_page("Calendar", Some(Screen::Calendar), &body)).into_response())
        }
    }
}

fn welcome(state: &AppState, query: &ScreenQuery) -> Response {
    let local = WelcomeState {
        symptoms: Selection::parse(query.symptoms.as_deref()),
        medication: Selection::parse(query.meds.as_deref()),
        custom: Selection::parse(query.custom.as_deref()),
    };

    if let Some(add) = query.add.as_deref() {
        let next = local.with_custom(local.custom.with(add));
        return Redirect::to(&next.url()).into_response();
    }

    let body = screens::welcome(&state.user_name, &state.fixtures, &local);
    Html(render_page("Welcome", Some(Screen::Welcome), &body)).into_response()
}

fn calendar_state(
    state: &AppState,
    query: &ScreenQuery,
    today: NaiveDate,
) -> Result<CalendarState, AppError> {
    let mut calendar = CalendarState::new(today);

    if let Some(raw) = query.date.as_deref() {
        let date = parse_date_param(raw)?;
        calendar.select_date(date, state.picker.as_ref(), state.fixtures.frequency_sets.len());
        debug!(%date, dataset = calendar.dataset, "calendar date selected");
    }

    if let Some(raw) = query.month.as_deref() {
        let month = calendar::parse_month(raw)
                .ok_or_else(|| AppError::bad_request("month must be YYYY-MM, years 1 to 9999"))?;
        calendar.show_month(month);
    }

    if query.modal.as_deref() == Some("closed") {
        calendar.close_modal();
    }

    Ok(calendar)
}

fn parse_date_param(raw: &str) -> Result<NaiveDate, AppError> {
    calendar::parse_date(raw)
        .ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD, years 1 to 9999"))
}

pub async fn get_symptoms(State(state): State<AppState>) -> Json<Vec<SymptomEntry>> {
    Json(state.fixtures.symptoms.clone())
}

pub async fn get_medication(State(state): State<AppState>) -> Json<Vec<MedicationEntry>> {
    Json(state.fixtures.medication.clone())
}

pub async fn get_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.fixtures.notifications.clone())
}

pub async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.fixtures.profile.clone())
}

pub async fn get_routes() -> Json<Vec<RouteInfo>> {
    Json(
        ROUTES
            .iter()
            .map(|route| RouteInfo {
                path: route.path.to_string(),
                label: route.label.to_string(),
                screen: route.screen.name().to_string(),
            })
            .collect(),
    )
}

/// Demo statistics for a date. The dataset is picked without looking at the date.
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let date = match query.date.as_deref() {
        Some(raw) => parse_date_param(raw)?,
        None => calendar::today(),
    };

    let sets = &state.fixtures.frequency_sets;
    let index = state.picker.pick(date, sets.len());
    let dataset = sets
        .get(index)
        .ok_or_else(|| AppError::not_found("no frequency datasets loaded"))?;

    Ok(Json(CalendarResponse {
        date: date.to_string(),
        dataset: dataset.name.clone(),
        rows: dataset.rows.clone(),
    }))
}
