//! Pet domain entity
//!
//! Represents an adoptable animal listed by exactly one organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::organization::OrganizationId;

/// Unique identifier for a pet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub String);

impl PetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PetId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PetId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Age bracket of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetAge {
    Puppy,
    Young,
    Adult,
    Senior,
}

impl std::fmt::Display for PetAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetAge::Puppy => write!(f, "puppy"),
            PetAge::Young => write!(f, "young"),
            PetAge::Adult => write!(f, "adult"),
            PetAge::Senior => write!(f, "senior"),
        }
    }
}

impl std::str::FromStr for PetAge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "puppy" => Ok(PetAge::Puppy),
            "young" => Ok(PetAge::Young),
            "adult" => Ok(PetAge::Adult),
            "senior" => Ok(PetAge::Senior),
            _ => Err(format!("Unknown pet age: {}", s)),
        }
    }
}

/// How much activity a pet needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Calm,
    Moderate,
    High,
}

impl std::fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnergyLevel::Low => write!(f, "low"),
            EnergyLevel::Calm => write!(f, "calm"),
            EnergyLevel::Moderate => write!(f, "moderate"),
            EnergyLevel::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for EnergyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(EnergyLevel::Low),
            "calm" => Ok(EnergyLevel::Calm),
            "moderate" => Ok(EnergyLevel::Moderate),
            "high" => Ok(EnergyLevel::High),
            _ => Err(format!("Unknown energy level: {}", s)),
        }
    }
}

/// Physical size of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for PetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetSize::Small => write!(f, "small"),
            PetSize::Medium => write!(f, "medium"),
            PetSize::Large => write!(f, "large"),
        }
    }
}

impl std::str::FromStr for PetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(PetSize::Small),
            "medium" => Ok(PetSize::Medium),
            "large" => Ok(PetSize::Large),
            _ => Err(format!("Unknown pet size: {}", s)),
        }
    }
}

/// A pet available for adoption
#[derive(Debug, Clone, Serialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    /// `None` means the organization gave no description
    pub description: Option<String>,
    pub age: PetAge,
    pub energy_level: EnergyLevel,
    pub size: PetSize,
    pub organization_id: OrganizationId,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new pet
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub description: Option<String>,
    pub age: PetAge,
    pub energy_level: EnergyLevel,
    pub size: PetSize,
    pub organization_id: OrganizationId,
}
