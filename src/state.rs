use crate::calendar::{DatasetPicker, RandomPicker};
use crate::models::Fixtures;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_name: String,
    pub fixtures: Arc<Fixtures>,
    pub picker: Arc<dyn DatasetPicker>,
}

impl AppState {
    pub fn new(user_name: impl Into<String>, fixtures: Fixtures) -> Self {
        Self::with_picker(user_name, fixtures, Arc::new(RandomPicker))
    }

    pub fn with_picker(
        user_name: impl Into<String>,
        fixtures: Fixtures,
        picker: Arc<dyn DatasetPicker>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            fixtures: Arc::new(fixtures),
            picker,
        }
    }
}
