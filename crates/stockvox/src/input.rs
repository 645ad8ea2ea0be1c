// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document loading for the CLI.

use std::path::Path;

use serde::de::DeserializeOwned;
use stockvox_core::{InventoryItem, StockvoxError};
use tracing::debug;

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StockvoxError> {
    let content = std::fs::read_to_string(path).map_err(|source| StockvoxError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| StockvoxError::Parse {
        message: format!("{}: {e}", path.display()),
        source: Some(Box::new(e)),
    })
}

/// Read an inventory snapshot: a JSON array of items.
pub fn read_inventory(path: &Path) -> Result<Vec<InventoryItem>, StockvoxError> {
    let items: Vec<InventoryItem> = read_json(path)?;
    debug!(path = %path.display(), items = items.len(), "inventory loaded");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_camel_case_inventory() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"1","name":"Apples","category":"Fruit","quantity":12,"price":0.5,"costPrice":0.2,"freshnessStatus":"Fresh"}}]"#
        )
        .unwrap();
        let items = read_inventory(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].cost_price, Some(0.2));
        assert_eq!(items[0].category_or_default(), "Fruit");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_inventory(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StockvoxError::Io { .. }), "{err:?}");
    }

    #[test]
    fn malformed_json_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = read_inventory(file.path()).unwrap_err();
        match err {
            StockvoxError::Parse { message, .. } => {
                assert!(message.contains(&file.path().display().to_string()));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
