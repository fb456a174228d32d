//! Payload validation for vehicle create / update requests.
//!
//! Payloads are checked field by field against the raw JSON value so that every
//! failure is reported at once, each tagged with the offending field name.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

use super::enums::{AcStatus, VehicleStatus, VehicleType};
use super::vehicle::{InsertVehicle, UpdateVehicle};

/// Accepted range for `mfgYear`
pub const MIN_MFG_YEAR: i32 = 1000;
pub const MAX_MFG_YEAR: i32 = 9999;

/// A single field failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field failure collected from one payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed on {} field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(what: &str, value: &Value) -> String {
    format!("Expected {}, received {}", what, kind_of(value))
}

fn text(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) if s.trim().is_empty() => Err("Must not be empty".to_string()),
        Value::String(s) => Ok(s.clone()),
        other => Err(expected("string", other)),
    }
}

fn integer(value: &Value) -> Result<i32, String> {
    let n = value.as_i64().ok_or_else(|| expected("integer", value))?;
    i32::try_from(n).map_err(|_| format!("Number {} is out of range", n))
}

fn mfg_year(value: &Value) -> Result<i32, String> {
    let n = integer(value)?;
    if !(MIN_MFG_YEAR..=MAX_MFG_YEAR).contains(&n) {
        return Err(format!(
            "Year must be between {} and {}",
            MIN_MFG_YEAR, MAX_MFG_YEAR
        ));
    }
    Ok(n)
}

fn seat_capacity(value: &Value) -> Result<i32, String> {
    let n = integer(value)?;
    if n < 1 {
        return Err("Number must be greater than or equal to 1".to_string());
    }
    Ok(n)
}

fn date(value: &Value) -> Result<NaiveDate, String> {
    let Value::String(s) = value else {
        return Err(expected("string", value));
    };
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn vehicle_type(value: &Value) -> Result<VehicleType, String> {
    match value {
        Value::String(s) => s.parse(),
        other => Err(expected("string", other)),
    }
}

fn vehicle_status(value: &Value) -> Result<VehicleStatus, String> {
    match value {
        Value::String(s) => s.parse(),
        other => Err(expected("string", other)),
    }
}

fn ac_status(value: &Value) -> Result<AcStatus, String> {
    AcStatus::try_from(integer(value)?)
}

/// Field reader over a JSON object that records failures as it goes
struct Fields<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> Fields<'a> {
    fn new(payload: &'a Value) -> Result<Self, ValidationErrors> {
        match payload {
            Value::Object(object) => Ok(Self {
                object,
                errors: ValidationErrors::default(),
            }),
            other => Err(ValidationErrors::single("", expected("object", other))),
        }
    }

    /// Absent fields yield `None` without recording a failure
    fn optional<T>(&mut self, name: &str, parse: fn(&Value) -> Result<T, String>) -> Option<T> {
        let value = self.object.get(name)?;
        match parse(value) {
            Ok(v) => Some(v),
            Err(message) => {
                self.errors.push(FieldError::new(name, message));
                None
            }
        }
    }

    fn required<T>(&mut self, name: &str, parse: fn(&Value) -> Result<T, String>) -> Option<T> {
        if !self.object.contains_key(name) {
            self.errors.push(FieldError::new(name, "Required"));
            return None;
        }
        self.optional(name, parse)
    }

    /// Absent, null, or a string. `Some(None)` means an explicit null.
    fn nullable_text(&mut self, name: &str) -> Option<Option<String>> {
        match self.object.get(name)? {
            Value::Null => Some(None),
            Value::String(s) => Some(Some(s.clone())),
            other => {
                self.errors
                    .push(FieldError::new(name, expected("string", other)));
                None
            }
        }
    }
}

impl InsertVehicle {
    /// Validate a create payload
    pub fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(payload)?;

        let reg_no = f.required("regNo", text);
        let make = f.required("make", text);
        let model = f.required("model", text);
        let mfg_year = f.required("mfgYear", mfg_year);
        let reg_date = f.required("regDate", date);
        let entity_name = f.required("entityName", text);
        let running_site = f.nullable_text("runningSite");
        let engine_no = f.required("engineNo", text);
        let chassis_no = f.required("chassisNo", text);
        let seat_capacity = f.required("seatCapacity", seat_capacity);
        let vehicle_type = f.required("vehicleType", vehicle_type);
        let ac_status = f.optional("acStatus", ac_status);
        let status = f.optional("status", vehicle_status);

        match (
            reg_no,
            make,
            model,
            mfg_year,
            reg_date,
            entity_name,
            engine_no,
            chassis_no,
            seat_capacity,
            vehicle_type,
        ) {
            (
                Some(reg_no),
                Some(make),
                Some(model),
                Some(mfg_year),
                Some(reg_date),
                Some(entity_name),
                Some(engine_no),
                Some(chassis_no),
                Some(seat_capacity),
                Some(vehicle_type),
            ) if f.errors.is_empty() => Ok(InsertVehicle {
                reg_no,
                make,
                model,
                mfg_year,
                reg_date,
                entity_name,
                running_site: running_site.flatten(),
                engine_no,
                chassis_no,
                seat_capacity,
                vehicle_type,
                ac_status,
                status,
            }),
            _ => Err(f.errors),
        }
    }
}

impl UpdateVehicle {
    /// Validate a partial update payload. Every field is optional.
    pub fn validate(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(payload)?;

        let update = UpdateVehicle {
            reg_no: f.optional("regNo", text),
            make: f.optional("make", text),
            model: f.optional("model", text),
            mfg_year: f.optional("mfgYear", mfg_year),
            reg_date: f.optional("regDate", date),
            entity_name: f.optional("entityName", text),
            running_site: f.nullable_text("runningSite"),
            engine_no: f.optional("engineNo", text),
            chassis_no: f.optional("chassisNo", text),
            seat_capacity: f.optional("seatCapacity", seat_capacity),
            vehicle_type: f.optional("vehicleType", vehicle_type),
            ac_status: f.optional("acStatus", ac_status),
            status: f.optional("status", vehicle_status),
        };

        f.errors.into_result(update)
    }
}
