//! Vehicle list filters

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::enums::SeatCapacityType;
use super::validation::{FieldError, ValidationErrors};
use super::vehicle::Vehicle;

/// Raw query string parameters for the vehicle list.
///
/// Values are kept as strings so that empty parameters (`?status=`) can be
/// dropped instead of rejected.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VehicleQuery {
    /// Bus, Winger or TT
    pub vehicle_type: Option<String>,
    /// 0 = Non-AC, 1 = AC
    pub ac_status: Option<String>,
    pub seat_capacity: Option<String>,
    /// exact (default), gte or lte
    pub seat_capacity_type: Option<String>,
    /// Minimum age in years, inclusive
    pub min_age: Option<String>,
    /// Maximum age in years, inclusive
    pub max_age: Option<String>,
    /// Active or Inactive
    pub status: Option<String>,
    /// Case-insensitive match on registration, make, model or entity
    pub search: Option<String>,
}

/// Typed filter set. Every `None` leaves that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleFilter {
    pub vehicle_type: Option<String>,
    pub ac_status: Option<i32>,
    pub seat_capacity: Option<i32>,
    pub seat_capacity_type: Option<SeatCapacityType>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl VehicleFilter {
    pub fn is_empty(&self) -> bool {
        *self == VehicleFilter::default()
    }

    /// Decide whether `vehicle` belongs in the result set.
    ///
    /// When `search` is set it alone decides inclusion: the other criteria
    /// are not consulted.
    pub fn matches(&self, vehicle: &Vehicle, current_year: i32) -> bool {
        if let Some(ref search) = self.search {
            return matches_search(vehicle, search);
        }

        if let Some(ref vehicle_type) = self.vehicle_type {
            if vehicle.vehicle_type.as_str() != vehicle_type {
                return false;
            }
        }

        if let Some(ac_status) = self.ac_status {
            if i32::from(vehicle.ac_status) != ac_status {
                return false;
            }
        }

        if let Some(seat_capacity) = self.seat_capacity {
            let comparison = self.seat_capacity_type.unwrap_or_default();
            if !comparison.accepts(vehicle.seat_capacity, seat_capacity) {
                return false;
            }
        }

        let age = vehicle.age(current_year);
        if self.min_age.is_some_and(|min| age < min) {
            return false;
        }
        if self.max_age.is_some_and(|max| age > max) {
            return false;
        }

        if let Some(ref status) = self.status {
            if vehicle.status.as_str() != status {
                return false;
            }
        }

        true
    }
}

fn matches_search(vehicle: &Vehicle, search: &str) -> bool {
    let needle = search.to_lowercase();
    [
        &vehicle.reg_no,
        &vehicle.make,
        &vehicle.model,
        &vehicle.entity_name,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Trimmed value, or `None` when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<VehicleQuery> for VehicleFilter {
    type Error = ValidationErrors;

    fn try_from(query: VehicleQuery) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();

        let mut int = |name: &str, value: Option<String>| -> Option<i32> {
            let raw = present(value)?;
            match raw.parse::<i32>() {
                Ok(n) => Some(n),
                Err(_) => {
                    errors.push(FieldError::new(
                        name,
                        format!("Expected integer, received '{}'", raw),
                    ));
                    None
                }
            }
        };

        let ac_status = int("acStatus", query.ac_status);
        let seat_capacity = int("seatCapacity", query.seat_capacity);
        let min_age = int("minAge", query.min_age);
        let max_age = int("maxAge", query.max_age);

        let seat_capacity_type = match present(query.seat_capacity_type) {
            None => None,
            Some(raw) => match raw.parse::<SeatCapacityType>() {
                Ok(t) => Some(t),
                Err(message) => {
                    errors.push(FieldError::new("seatCapacityType", message));
                    None
                }
            },
        };

        let filter = VehicleFilter {
            vehicle_type: present(query.vehicle_type),
            ac_status,
            seat_capacity,
            seat_capacity_type,
            min_age,
            max_age,
            status: present(query.status),
            // Search is matched as typed; only blank input is dropped
            search: query.search.filter(|s| !s.trim().is_empty()),
        };

        errors.into_result(filter)
    }
}
