//! Local state for toggle controls and chip lists.
//!
//! A screen's selections travel in its query string, so every update builds a
//! fresh [`Selection`] instead of editing the current one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggle {
    selected: bool,
}

impl Toggle {
    pub fn new(selected: bool) -> Self {
        Self { selected }
    }

    pub fn click(&mut self) {
        self.selected = !self.selected;
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn emphasis(&self) -> Emphasis {
        Emphasis::for_state(self.selected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Filled,
    Outlined,
}

impl Emphasis {
    pub fn for_state(selected: bool) -> Self {
        if selected {
            Emphasis::Filled
        } else {
            Emphasis::Outlined
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Emphasis::Filled => "toggle primary",
            Emphasis::Outlined => "toggle tertiary",
        }
    }
}

/// Ordered, duplicate-free list of selected values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    /// Parses a comma separated query value. Blank items and repeats are dropped.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut values: Vec<String> = Vec::new();
        for item in raw.unwrap_or_default().split(',') {
            let item = item.trim();
            if !item.is_empty() && !values.iter().any(|v| v == item) {
                values.push(item.to_string());
            }
        }
        Self { values }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn toggle_for(&self, value: &str) -> Toggle {
        Toggle::new(self.contains(value))
    }

    pub fn toggled(&self, value: &str) -> Self {
        if self.contains(value) {
            self.without(value)
        } else {
            self.with(value)
        }
    }

    pub fn with(&self, value: &str) -> Self {
        let value = clean(value);
        if value.is_empty() || self.contains(&value) {
            return self.clone();
        }
        let mut values = self.values.clone();
        values.push(value);
        Self { values }
    }

    pub fn without(&self, value: &str) -> Self {
        Self {
            values: self
                .values
                .iter()
                .filter(|v| v.as_str() != value)
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn to_query(&self) -> String {
        self.values.join(",")
    }
}

// Commas separate items in the query string.
fn clean(value: &str) -> String {
    value.replace(',', " ").trim().to_string()
}
