//! Vehicle service

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{InsertVehicle, UpdateVehicle, Vehicle, VehicleFilter},
    repository::Repository,
};

const NOT_FOUND: &str = "Vehicle not found";

#[derive(Clone)]
pub struct VehiclesService {
    repository: Repository,
}

impl VehiclesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self, filter: &VehicleFilter) -> Vec<Vehicle> {
        if filter.is_empty() {
            self.repository.vehicles.list(None)
        } else {
            self.repository.vehicles.list(Some(filter))
        }
    }

    pub fn get_by_id(&self, sl_no: i32) -> AppResult<Vehicle> {
        self.repository
            .vehicles
            .get_by_id(sl_no)
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validate a raw create payload and store it
    pub fn create(&self, payload: &Value) -> AppResult<Vehicle> {
        let data = InsertVehicle::validate(payload)?;
        let vehicle = self
            .repository
            .vehicles
            .create(data)
            .ok_or_else(|| AppError::Internal("Vehicle serial numbers exhausted".to_string()))?;
        tracing::info!(sl_no = vehicle.sl_no, reg_no = %vehicle.reg_no, "Vehicle created");
        Ok(vehicle)
    }

    /// Validate a raw partial payload and merge it into an existing vehicle
    pub fn update(&self, sl_no: i32, payload: &Value) -> AppResult<Vehicle> {
        let data = UpdateVehicle::validate(payload)?;
        if data.is_empty() {
            tracing::debug!(sl_no, "Empty update, nothing to merge");
        }
        let vehicle = self
            .repository
            .vehicles
            .update(sl_no, &data)
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
        tracing::info!(sl_no, "Vehicle updated");
        Ok(vehicle)
    }

    pub fn delete(&self, sl_no: i32) -> AppResult<()> {
        if !self.repository.vehicles.delete(sl_no) {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!(sl_no, "Vehicle deleted");
        Ok(())
    }

    /// Number of vehicles currently held (for readiness reporting)
    pub fn count(&self) -> usize {
        self.repository.vehicles.len()
    }
}
