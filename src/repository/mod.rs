//! Repository layer for vehicle storage

pub mod seed;
pub mod vehicles;

/// Main repository struct holding every store
#[derive(Clone, Default)]
pub struct Repository {
    pub vehicles: vehicles::VehiclesRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository preloaded with the demo fleet
    pub fn with_sample_data() -> Self {
        let repository = Self::new();
        seed::load_sample_vehicles(&repository.vehicles);
        repository
    }
}
