//! Business logic services

pub mod vehicles;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub vehicles: vehicles::VehiclesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            vehicles: vehicles::VehiclesService::new(repository),
        }
    }
}
