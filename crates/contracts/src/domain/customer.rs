use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer record as stored by the backend.
///
/// Field names follow the production database schema (Indonesian):
/// `nama` = name, `alamat` = address, `telepon` = phone,
/// `ongkir` = shipping cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub nama: String,
    #[serde(default)]
    pub alamat: Option<String>,
    #[serde(default)]
    pub telepon: Option<String>,
    #[serde(default)]
    pub telepon_alt: Option<String>,
    #[serde(default)]
    pub telepon_pemesan: Option<String>,
    /// Google Maps link.
    #[serde(default)]
    pub maps: Option<String>,
    /// Shipping cost in IDR.
    #[serde(default)]
    pub ongkir: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub date_created: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Payload for creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub nama: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alamat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telepon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telepon_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telepon_pemesan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ongkir: Option<f64>,
}

/// Activity filter for the customer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActivityFilter {
    pub fn code(self) -> &'static str {
        match self {
            ActivityFilter::All => "all",
            ActivityFilter::Active => "active",
            ActivityFilter::Inactive => "inactive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(ActivityFilter::All),
            "active" => Some(ActivityFilter::Active),
            "inactive" => Some(ActivityFilter::Inactive),
            _ => None,
        }
    }

    pub fn all() -> [ActivityFilter; 3] {
        [
            ActivityFilter::All,
            ActivityFilter::Active,
            ActivityFilter::Inactive,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ActivityFilter::All => "Semua pelanggan",
            ActivityFilter::Active => "Aktif",
            ActivityFilter::Inactive => "Nonaktif",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_labels_are_indonesian() {
        assert_eq!(ActivityFilter::All.display_name(), "Semua pelanggan");
        assert_eq!(ActivityFilter::Inactive.display_name(), "Nonaktif");
    }
}
