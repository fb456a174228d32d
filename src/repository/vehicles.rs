//! In-memory vehicle store

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Datelike, Utc};

use crate::models::{InsertVehicle, UpdateVehicle, Vehicle, VehicleFilter};

/// Records keyed by serial number, plus the next serial to hand out
#[derive(Debug)]
struct VehicleTable {
    rows: BTreeMap<i32, Vehicle>,
    next_sl_no: i32,
}

impl Default for VehicleTable {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_sl_no: 1,
        }
    }
}

/// Authoritative vehicle collection.
///
/// Clones share the same table. Mutations hold the write lock for their whole
/// duration, so serial assignment and insertion happen as one step.
#[derive(Debug, Clone, Default)]
pub struct VehiclesRepository {
    table: Arc<RwLock<VehicleTable>>,
}

impl VehiclesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation leaves the table consistent, so a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, VehicleTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VehicleTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// List vehicles matching `filter`, newest serial first
    pub fn list(&self, filter: Option<&VehicleFilter>) -> Vec<Vehicle> {
        self.list_as_of(filter, Utc::now().year())
    }

    /// Same as [`list`](Self::list) with an explicit reference year for age filters
    pub fn list_as_of(&self, filter: Option<&VehicleFilter>, current_year: i32) -> Vec<Vehicle> {
        self.read()
            .rows
            .values()
            .rev()
            .filter(|v| filter.map_or(true, |f| f.matches(v, current_year)))
            .cloned()
            .collect()
    }

    /// Get vehicle by serial number
    pub fn get_by_id(&self, sl_no: i32) -> Option<Vehicle> {
        self.read().rows.get(&sl_no).cloned()
    }

    /// Insert a vehicle under the next serial number.
    /// `None` once the serial space is exhausted; nothing is stored then.
    pub fn create(&self, data: InsertVehicle) -> Option<Vehicle> {
        let mut table = self.write();
        let sl_no = table.next_sl_no;
        table.next_sl_no = sl_no.checked_add(1)?;

        let vehicle = Vehicle::from_insert(sl_no, data);
        table.rows.insert(sl_no, vehicle.clone());
        Some(vehicle)
    }

    /// Merge `data` into an existing vehicle. `None` if it does not exist.
    pub fn update(&self, sl_no: i32, data: &UpdateVehicle) -> Option<Vehicle> {
        let mut table = self.write();
        let vehicle = table.rows.get_mut(&sl_no)?;
        vehicle.apply(data);
        Some(vehicle.clone())
    }

    /// Remove a vehicle, returning whether it existed
    pub fn delete(&self, sl_no: i32) -> bool {
        self.write().rows.remove(&sl_no).is_some()
    }

    #[cfg(test)]
    fn with_next_sl_no(next_sl_no: i32) -> Self {
        let repo = Self::new();
        repo.write().next_sl_no = next_sl_no;
        repo
    }

    pub fn len(&self) -> usize {
        self.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().rows.is_empty()
    }
}
