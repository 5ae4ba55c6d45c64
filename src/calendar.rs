use chrono::{Datelike, Duration, Local, NaiveDate};
use rand::Rng;

/// Chooses which sample dataset the calendar modal shows.
pub trait DatasetPicker: Send + Sync {
    fn pick(&self, date: NaiveDate, count: usize) -> usize;
}

/// Demo fixture: uniform over the sample sets, ignoring the date.
pub struct RandomPicker;

impl DatasetPicker for RandomPicker {
    fn pick(&self, _date: NaiveDate, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub selected: NaiveDate,
    pub month: NaiveDate,
    pub modal_open: bool,
    pub dataset: usize,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected: today,
            month: month_start(today),
            modal_open: false,
            dataset: 0,
        }
    }

    pub fn select_date(&mut self, date: NaiveDate, picker: &dyn DatasetPicker, count: usize) {
        self.selected = date;
        self.month = month_start(date);
        self.modal_open = true;
        self.dataset = picker.pick(date, count);
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn show_month(&mut self, month: NaiveDate) {
        self.month = month_start(month);
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Years the picker can page through without leaving chrono's date range.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .filter(|date| YEAR_RANGE.contains(&date.year()))
}

pub fn parse_month(raw: &str) -> Option<NaiveDate> {
    parse_date(&format!("{}-01", raw.trim()))
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn previous_month(month: NaiveDate) -> NaiveDate {
    month_start(month_start(month) - Duration::days(1))
}

pub fn next_month(month: NaiveDate) -> NaiveDate {
    month_start(month_start(month) + Duration::days(31))
}

/// Monday-first weeks covering the month; cells outside it are `None`.
pub fn month_grid(month: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = month_start(month);
    let grid_start = first - Duration::days(first.weekday().num_days_from_monday() as i64);

    let mut weeks = Vec::with_capacity(6);
    let mut cursor = grid_start;
    loop {
        let mut week = [None; 7];
        for cell in week.iter_mut() {
            if cursor.month() == first.month() && cursor.year() == first.year() {
                *cell = Some(cursor);
            }
            cursor += Duration::days(1);
        }
        weeks.push(week);
        if cursor.month() != first.month() || cursor.year() != first.year() {
            break;
        }
    }
    weeks
}
