//! Dataset model matching the frontend Dataset interface.

use serde::{Deserialize, Serialize};

/// Publication status of a dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatasetStatus {
    Draft,
    Published,
    Archived,
}

impl DatasetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetStatus::Draft => "draft",
            DatasetStatus::Published => "published",
            DatasetStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(DatasetStatus::Draft),
            "published" => Some(DatasetStatus::Published),
            "archived" => Some(DatasetStatus::Archived),
            _ => None,
        }
    }
}

/// Distribution format of a dataset.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DatasetFormat {
    CSV,
    JSON,
    XML,
    XLSX,
    API,
}

impl DatasetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetFormat::CSV => "CSV",
            DatasetFormat::JSON => "JSON",
            DatasetFormat::XML => "XML",
            DatasetFormat::XLSX => "XLSX",
            DatasetFormat::API => "API",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CSV" => Some(DatasetFormat::CSV),
            "JSON" => Some(DatasetFormat::JSON),
            "XML" => Some(DatasetFormat::XML),
            "XLSX" => Some(DatasetFormat::XLSX),
            "API" => Some(DatasetFormat::API),
            _ => None,
        }
    }
}

/// A catalog dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub format: DatasetFormat,
    pub download_url: Option<String>,
    pub api_url: Option<String>,
    pub spatial_coverage: Option<String>,
    pub temporal_coverage: Option<String>,
    pub publication_date: String,
    pub update_frequency: Option<String>,
    pub last_updated: String,
    pub file_size: Option<u64>,
    pub record_count: Option<u64>,
    pub downloads_count: u64,
    pub views_count: u64,
    pub featured: bool,
    pub status: DatasetStatus,
    pub current_version: u32,
    /// Organization that produced the dataset. Referential integrity is not
    /// enforced; an orphaned id is tolerated.
    pub producer_id: String,
    pub theme_id: Option<String>,
    pub license_id: String,
    pub created_by_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Form data for creating a new dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetForm {
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub format: DatasetFormat,
    #[serde(default)]
    pub status: Option<DatasetStatus>,
    pub producer_id: String,
    #[serde(default)]
    pub theme_id: Option<String>,
    pub license_id: String,
    #[serde(default)]
    pub update_frequency: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub spatial_coverage: Option<String>,
    #[serde(default)]
    pub temporal_coverage: Option<String>,
}

/// Partial form data for updating an existing dataset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub format: Option<DatasetFormat>,
    #[serde(default)]
    pub status: Option<DatasetStatus>,
    #[serde(default)]
    pub producer_id: Option<String>,
    #[serde(default)]
    pub theme_id: Option<String>,
    #[serde(default)]
    pub license_id: Option<String>,
    #[serde(default)]
    pub update_frequency: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub spatial_coverage: Option<String>,
    #[serde(default)]
    pub temporal_coverage: Option<String>,
}

/// Active filter predicate for dataset listings. Matching is conjunctive.
#[derive(Debug, Clone, Default)]
pub struct DatasetFilters {
    pub status: Option<DatasetStatus>,
    pub theme_id: Option<String>,
    pub producer_id: Option<String>,
    pub format: Option<DatasetFormat>,
    pub featured: Option<bool>,
    /// Case-insensitive substring match on title and short description.
    pub search: Option<String>,
}

impl DatasetFilters {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.theme_id.is_none()
            && self.producer_id.is_none()
            && self.format.is_none()
            && self.featured.is_none()
            && self.search.is_none()
    }

    /// Check whether a dataset matches the active predicate.
    pub fn matches(&self, dataset: &Dataset) -> bool {
        if let Some(status) = self.status {
            if dataset.status != status {
                return false;
            }
        }
        if let Some(theme_id) = &self.theme_id {
            if dataset.theme_id.as_deref() != Some(theme_id.as_str()) {
                return false;
            }
        }
        if let Some(producer_id) = &self.producer_id {
            if dataset.producer_id != *producer_id {
                return false;
            }
        }
        if let Some(format) = self.format {
            if dataset.format != format {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if dataset.featured != featured {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let search = search.to_lowercase();
            let in_title = dataset.title.to_lowercase().contains(&search);
            let in_short = dataset
                .short_description
                .as_ref()
                .map(|s| s.to_lowercase().contains(&search))
                .unwrap_or(false);
            if !in_title && !in_short {
                return false;
            }
        }
        true
    }
}
