use crate::models::Fixtures;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Loads fixtures from `path`, falling back to the built-in set on any problem.
pub async fn load_fixtures(path: Option<&Path>) -> Fixtures {
    let Some(path) = path else {
        return Fixtures::default();
    };

    let fixtures = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Fixtures>(&bytes) {
            Ok(fixtures) => fixtures,
            Err(err) => {
                error!("failed to parse fixtures file {}: {err}", path.display());
                return Fixtures::default();
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            error!("fixtures file {} not found, using built-in data", path.display());
            return Fixtures::default();
        }
        Err(err) => {
            error!("failed to read fixtures file {}: {err}", path.display());
            return Fixtures::default();
        }
    };

    match fixtures.validate() {
        Ok(()) => {
            info!("loaded fixtures from {}", path.display());
            fixtures
        }
        Err(err) => {
            error!("invalid fixtures in {}: {err}", path.display());
            Fixtures::default()
        }
    }
}
