use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QifcatError, Result};

/// Learned categories: each category name maps to the payee keywords that
/// identify it. A category never maps to an empty keyword list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryStore {
    categories: BTreeMap<String, Vec<String>>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Categories with their keywords, in lexicographic category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Append `keyword` to `category`, creating the category if needed.
    /// Returns false when the keyword was already listed.
    pub fn add_keyword(&mut self, category: &str, keyword: &str) -> bool {
        let keywords = self.categories.entry(category.to_string()).or_default();
        if keywords.iter().any(|k| k == keyword) {
            return false;
        }
        keywords.push(keyword.to_string());
        true
    }

    /// Remove `keyword` from `category`, dropping the category once its list
    /// is empty. Returns false when there was nothing to remove.
    pub fn remove_keyword(&mut self, category: &str, keyword: &str) -> bool {
        let Some(keywords) = self.categories.get_mut(category) else {
            return false;
        };
        let Some(pos) = keywords.iter().position(|k| k == keyword) else {
            return false;
        };
        keywords.remove(pos);
        if keywords.is_empty() {
            self.categories.remove(category);
        }
        true
    }

    /// Load the store from `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No category store at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        log::info!("Loading category store from {}...", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| QifcatError::StoreIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut store: Self =
            serde_json::from_str(&content).map_err(|source| QifcatError::Store {
                path: path.to_path_buf(),
                source,
            })?;
        store.categories.retain(|name, keywords| {
            if keywords.is_empty() {
                log::warn!("Dropping category {name:?} without keywords");
            }
            !keywords.is_empty()
        });
        log::info!("Loaded {} categories", store.len());
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        log::info!("Saving category store to {}...", path.display());
        let io_err = |source| QifcatError::StoreIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }
        std::fs::write(path, format!("{}\n", self.to_json()?)).map_err(io_err)?;
        Ok(())
    }

    /// Sorted keys, four-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(std::io::Error::from)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
