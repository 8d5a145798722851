//! JSON results file
//!
//! The whole collection is serialized first and written to a sibling
//! temporary file, which is renamed over the destination only once the write
//! has completed. A failed run never leaves a partial results file behind.

use crate::crawler::AggregatedItem;
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the aggregated collection as pretty-printed UTF-8 JSON
///
/// # Arguments
///
/// * `items` - The aggregated items, in discovery order
/// * `output_path` - Destination file
pub fn write_results(items: &[AggregatedItem], output_path: &Path) -> OutputResult<()> {
    let json = serde_json::to_vec_pretty(items)?;

    let temp_path = temp_path_for(output_path);
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&json)?;
        file.sync_all()?;
    }

    if let Err(e) = std::fs::rename(&temp_path, output_path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(())
}

/// Reads a results file back into memory
pub fn read_results(path: &Path) -> OutputResult<Vec<AggregatedItem>> {
    let content = std::fs::read(path)?;
    Ok(serde_json::from_slice(&content)?)
}

fn temp_path_for(output_path: &Path) -> PathBuf {
    let mut name = output_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    output_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::{Feature, ListingEntry};
    use crate::extract::DetailRecord;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn item(url: &str, brand: Option<&str>) -> AggregatedItem {
        let mut car_details = DetailRecord::default();
        car_details.breadcrumbs.brand = brand.map(str::to_string);
        AggregatedItem {
            listing: ListingEntry {
                url: url.to_string(),
                urgent_status: Some("Срочно".to_string()),
                features: BTreeSet::from([Feature::Vip]),
            },
            car_details,
        }
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("full_results.json");
        let items = vec![
            item("https://m.mashina.kg/details/1", Some("Toyota")),
            item("https://m.mashina.kg/details/2", None),
        ];

        write_results(&items, &path).unwrap();

        assert_eq!(read_results(&path).unwrap(), items);
        assert!(!dir.path().join("full_results.json.tmp").exists());
    }

    #[test]
    fn test_non_ascii_is_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_results(&[item("https://m.mashina.kg/details/1", None)], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Срочно"));
        assert!(text.contains("\"car_details\""));
    }

    #[test]
    fn test_overwrites_previous_results() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale").unwrap();

        write_results(&[], &path).unwrap();
        assert_eq!(read_results(&path).unwrap(), Vec::new());
    }

    #[test]
    fn test_missing_directory_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(write_results(&[], &path).is_err());
        assert!(!path.exists());
    }
}
