use movement_core::error::Result;
use movement_core::{parse_dataset, Dataset};
use std::path::Path;

/// Reads and parses the dataset file. Never cached; every call re-reads it.
pub async fn load_dataset(path: &Path) -> Result<Dataset> {
    let body = tokio::fs::read_to_string(path).await?;
    let dataset = parse_dataset(&body)?;
    log::info!(
        "Behaviour data loaded from {}: {} locations",
        path.display(),
        dataset.len()
    );
    Ok(dataset)
}
