//! Domain types for the rental fleet
//!
//! These mirror the backend's JSON representation. Records are owned by the
//! fetch that produced them and handed to the renderer by value.

use serde::{Deserialize, Serialize};

/// Gearbox type as reported by the backend.
///
/// The backend stores upper-case enum names (`AUTOMATIC`, `SEMI_AUTOMATIC`);
/// parsing is case-insensitive and accepts spaces or dashes in place of `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Transmission {
    Automatic,
    Manual,
    #[serde(rename = "CVT")]
    Cvt,
    SemiAutomatic,
}

impl Transmission {
    /// Dictionary key used to label this transmission in the UI.
    pub fn label_key(&self) -> &'static str {
        match self {
            Transmission::Automatic => "car.transmission.automatic",
            Transmission::Manual => "car.transmission.manual",
            Transmission::Cvt => "car.transmission.cvt",
            Transmission::SemiAutomatic => "car.transmission.semi_automatic",
        }
    }
}

impl TryFrom<String> for Transmission {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "AUTOMATIC" | "AUTO" => Ok(Transmission::Automatic),
            "MANUAL" => Ok(Transmission::Manual),
            "CVT" => Ok(Transmission::Cvt),
            "SEMI_AUTOMATIC" | "ROBOT" => Ok(Transmission::SemiAutomatic),
            _ => Err(format!("unknown transmission '{}'", value)),
        }
    }
}

/// Availability of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum CarStatus {
    #[default]
    Available,
    Unavailable,
}

impl CarStatus {
    /// Value sent in the `status` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            CarStatus::Available => "AVAILABLE",
            CarStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl TryFrom<String> for CarStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_uppercase().as_str() {
            "AVAILABLE" => Ok(CarStatus::Available),
            "UNAVAILABLE" => Ok(CarStatus::Unavailable),
            _ => Err(format!("unknown car status '{}'", value)),
        }
    }
}

/// A single rentable vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: u64,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub daily_price: f64,
    pub seats: u8,
    pub transmission: Transmission,
    pub fuel_type: String,
    pub category_id: u64,
    /// Ordered image URLs, first is the cover.
    #[serde(default)]
    pub images: Vec<String>,

    // Optional extras the backend sends along with the core fields
    #[serde(default)]
    pub status: Option<CarStatus>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub horsepower: Option<u32>,
    #[serde(default)]
    pub deposit: Option<f64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl VehicleRecord {
    /// "Brand Model (Year)"
    pub fn full_name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.year)
    }

    /// Cover image: explicit thumbnail first, then the first gallery image.
    pub fn cover_image(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }

    pub fn is_available(&self) -> bool {
        self.status.unwrap_or_default() == CarStatus::Available
    }
}

/// A vehicle category (economy, comfort, SUV, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Category selection in the fleet view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only vehicles of this category id
    Category(u64),
}

impl CategoryFilter {
    /// Category id to send to the backend, if any.
    pub fn category_id(&self) -> Option<u64> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(id) => Some(*id),
        }
    }

    pub fn matches(&self, vehicle: &VehicleRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => vehicle.category_id == *id,
        }
    }
}

impl From<Option<u64>> for CategoryFilter {
    fn from(value: Option<u64>) -> Self {
        value.map_or(CategoryFilter::All, CategoryFilter::Category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(id) => write!(f, "{}", id),
        }
    }
}
