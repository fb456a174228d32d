//! Data models for the fleet inventory

pub mod enums;
pub mod filter;
pub mod validation;
pub mod vehicle;

// Re-export commonly used types
pub use enums::{AcStatus, SeatCapacityType, VehicleStatus, VehicleType};
pub use filter::{VehicleFilter, VehicleQuery};
pub use validation::{FieldError, ValidationErrors};
pub use vehicle::{InsertVehicle, UpdateVehicle, Vehicle};
