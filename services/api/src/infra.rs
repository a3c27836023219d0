use hiring_dashboard::error::AppError;
use hiring_dashboard::gateway::InMemoryGateway;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads a `{"<table>": [rows...]}` document into an in-memory store.
pub(crate) fn load_fixtures(path: &Path) -> Result<InMemoryGateway, AppError> {
    let file = File::open(path)?;
    let gateway = InMemoryGateway::from_reader(BufReader::new(file))?;
    info!(path = %path.display(), tables = ?gateway.table_names(), "loaded fixtures");
    Ok(gateway)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn loads_the_bundled_fixtures() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../fixtures/recruitment.json");
        let gateway = load_fixtures(&path).expect("fixtures load");
        assert!(gateway.table_names().contains(&"candidate_profiles"));
    }

    #[test]
    fn missing_files_are_io_errors() {
        let err =
            load_fixtures(Path::new("/nonexistent/fixtures.json")).expect_err("missing file");
        assert!(matches!(err, AppError::Io(_)));
    }
}
