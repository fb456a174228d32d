//! Shared domain enums for fleet vehicles

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// VehicleType
// ---------------------------------------------------------------------------

/// Body style of a fleet vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum VehicleType {
    Bus,
    Winger,
    /// Tempo Traveller
    #[serde(rename = "TT")]
    Tt,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Bus, VehicleType::Winger, VehicleType::Tt];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Bus => "Bus",
            VehicleType::Winger => "Winger",
            VehicleType::Tt => "TT",
        }
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid enum value. Expected 'Bus' | 'Winger' | 'TT', received '{}'",
                    s
                )
            })
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VehicleStatus
// ---------------------------------------------------------------------------

/// Operational status of a vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum VehicleStatus {
    #[default]
    Active,
    Inactive,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Inactive => "Inactive",
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(VehicleStatus::Active),
            "Inactive" => Ok(VehicleStatus::Inactive),
            other => Err(format!(
                "Invalid enum value. Expected 'Active' | 'Inactive', received '{}'",
                other
            )),
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AcStatus
// ---------------------------------------------------------------------------

/// Air-conditioning flag, carried on the wire as 0 (Non-AC) or 1 (AC)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum AcStatus {
    #[default]
    NonAc = 0,
    Ac = 1,
}

impl TryFrom<i32> for AcStatus {
    type Error = String;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(AcStatus::NonAc),
            1 => Ok(AcStatus::Ac),
            other => Err(format!(
                "Invalid enum value. Expected 0 | 1, received {}",
                other
            )),
        }
    }
}

impl From<AcStatus> for i32 {
    fn from(s: AcStatus) -> Self {
        s as i32
    }
}

impl std::fmt::Display for AcStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AcStatus::NonAc => "Non-AC",
            AcStatus::Ac => "AC",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// SeatCapacityType
// ---------------------------------------------------------------------------

/// Comparison applied by the seat capacity filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeatCapacityType {
    #[default]
    Exact,
    Gte,
    Lte,
}

impl SeatCapacityType {
    /// Whether `actual` satisfies the comparison against `wanted`
    pub fn accepts(self, actual: i32, wanted: i32) -> bool {
        match self {
            SeatCapacityType::Exact => actual == wanted,
            SeatCapacityType::Gte => actual >= wanted,
            SeatCapacityType::Lte => actual <= wanted,
        }
    }
}

impl FromStr for SeatCapacityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(SeatCapacityType::Exact),
            "gte" => Ok(SeatCapacityType::Gte),
            "lte" => Ok(SeatCapacityType::Lte),
            other => Err(format!(
                "Invalid enum value. Expected 'exact' | 'gte' | 'lte', received '{}'",
                other
            )),
        }
    }
}
