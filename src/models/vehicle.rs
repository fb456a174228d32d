//! Vehicle model and its insert / partial-update forms

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{AcStatus, VehicleStatus, VehicleType};

/// Fleet vehicle record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Serial number, assigned by the store
    pub sl_no: i32,
    /// Registration number
    pub reg_no: String,
    pub make: String,
    pub model: String,
    /// Manufacturing year
    pub mfg_year: i32,
    /// Registration date (YYYY-MM-DD)
    pub reg_date: NaiveDate,
    /// Owning entity
    pub entity_name: String,
    /// Route or site the vehicle runs on
    pub running_site: Option<String>,
    pub engine_no: String,
    pub chassis_no: String,
    pub seat_capacity: i32,
    pub vehicle_type: VehicleType,
    /// 0 = Non-AC, 1 = AC
    #[schema(value_type = i32, example = 0)]
    pub ac_status: AcStatus,
    pub status: VehicleStatus,
}

impl Vehicle {
    /// Materialize a stored record from a validated insert payload
    pub fn from_insert(sl_no: i32, data: InsertVehicle) -> Self {
        Self {
            sl_no,
            reg_no: data.reg_no,
            make: data.make,
            model: data.model,
            mfg_year: data.mfg_year,
            reg_date: data.reg_date,
            entity_name: data.entity_name,
            running_site: data.running_site.filter(|site| !site.is_empty()),
            engine_no: data.engine_no,
            chassis_no: data.chassis_no,
            seat_capacity: data.seat_capacity,
            vehicle_type: data.vehicle_type,
            ac_status: data.ac_status.unwrap_or_default(),
            status: data.status.unwrap_or_default(),
        }
    }

    /// Age in whole calendar years
    pub fn age(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.mfg_year)
    }

    /// Overwrite every field present in `update`. `sl_no` is never touched.
    pub fn apply(&mut self, update: &UpdateVehicle) {
        macro_rules! merge_field {
            ($field:ident) => {
                if let Some(ref val) = update.$field {
                    self.$field = val.clone();
                }
            };
        }

        merge_field!(reg_no);
        merge_field!(make);
        merge_field!(model);
        merge_field!(mfg_year);
        merge_field!(reg_date);
        merge_field!(entity_name);
        merge_field!(running_site);
        merge_field!(engine_no);
        merge_field!(chassis_no);
        merge_field!(seat_capacity);
        merge_field!(vehicle_type);
        merge_field!(ac_status);
        merge_field!(status);
    }
}

/// Create vehicle request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertVehicle {
    pub reg_no: String,
    pub make: String,
    pub model: String,
    pub mfg_year: i32,
    pub reg_date: NaiveDate,
    pub entity_name: String,
    pub running_site: Option<String>,
    pub engine_no: String,
    pub chassis_no: String,
    /// At least 1
    pub seat_capacity: i32,
    pub vehicle_type: VehicleType,
    /// Defaults to 0 (Non-AC)
    #[schema(value_type = Option<i32>)]
    pub ac_status: Option<AcStatus>,
    /// Defaults to Active
    pub status: Option<VehicleStatus>,
}

/// Update vehicle request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateVehicle {
    pub reg_no: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub mfg_year: Option<i32>,
    pub reg_date: Option<NaiveDate>,
    pub entity_name: Option<String>,
    /// `Some(None)` clears the running site
    #[schema(value_type = Option<String>, nullable)]
    pub running_site: Option<Option<String>>,
    pub engine_no: Option<String>,
    pub chassis_no: Option<String>,
    pub seat_capacity: Option<i32>,
    pub vehicle_type: Option<VehicleType>,
    #[schema(value_type = Option<i32>)]
    pub ac_status: Option<AcStatus>,
    pub status: Option<VehicleStatus>,
}

impl UpdateVehicle {
    pub fn is_empty(&self) -> bool {
        *self == UpdateVehicle::default()
    }
}
