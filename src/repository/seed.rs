//! Demo fleet loaded at startup

use chrono::NaiveDate;

use super::vehicles::VehiclesRepository;
use crate::models::{AcStatus, InsertVehicle, VehicleStatus, VehicleType};

struct SampleVehicle {
    reg_no: &'static str,
    make: &'static str,
    model: &'static str,
    mfg_year: i32,
    reg_date: (i32, u32, u32),
    entity_name: &'static str,
    running_site: &'static str,
    engine_no: &'static str,
    chassis_no: &'static str,
    seat_capacity: i32,
    vehicle_type: VehicleType,
    ac_status: AcStatus,
    status: VehicleStatus,
}

const SAMPLE_VEHICLES: [SampleVehicle; 5] = [
    SampleVehicle {
        reg_no: "MP-09-AB-1234",
        make: "Tata",
        model: "Ultra 1518",
        mfg_year: 2019,
        reg_date: (2019, 3, 15),
        entity_name: "City Transport",
        running_site: "Route 42A",
        engine_no: "ENG001234",
        chassis_no: "CHS001234",
        seat_capacity: 45,
        vehicle_type: VehicleType::Bus,
        ac_status: AcStatus::Ac,
        status: VehicleStatus::Active,
    },
    SampleVehicle {
        reg_no: "DL-01-XY-5678",
        make: "Ashok Leyland",
        model: "STILE",
        mfg_year: 2020,
        reg_date: (2020, 6, 20),
        entity_name: "Metro Transport",
        running_site: "Route 15B",
        engine_no: "ENG005678",
        chassis_no: "CHS005678",
        seat_capacity: 12,
        vehicle_type: VehicleType::Winger,
        ac_status: AcStatus::Ac,
        status: VehicleStatus::Active,
    },
    SampleVehicle {
        reg_no: "HR-26-CD-9012",
        make: "Force Motors",
        model: "Traveller",
        mfg_year: 2018,
        reg_date: (2018, 11, 10),
        entity_name: "Express Tours",
        running_site: "Highway Route",
        engine_no: "ENG009012",
        chassis_no: "CHS009012",
        seat_capacity: 17,
        vehicle_type: VehicleType::Tt,
        ac_status: AcStatus::NonAc,
        status: VehicleStatus::Active,
    },
    SampleVehicle {
        reg_no: "UP-14-EF-3456",
        make: "Tata",
        model: "LP 909",
        mfg_year: 2017,
        reg_date: (2017, 8, 5),
        entity_name: "Local Transit",
        running_site: "City Loop",
        engine_no: "ENG003456",
        chassis_no: "CHS003456",
        seat_capacity: 32,
        vehicle_type: VehicleType::Bus,
        ac_status: AcStatus::NonAc,
        status: VehicleStatus::Inactive,
    },
    SampleVehicle {
        reg_no: "GJ-05-GH-7890",
        make: "Mahindra",
        model: "Bolero Maxi Truck",
        mfg_year: 2021,
        reg_date: (2021, 1, 15),
        entity_name: "Regional Connect",
        running_site: "Inter-city Route",
        engine_no: "ENG007890",
        chassis_no: "CHS007890",
        seat_capacity: 9,
        vehicle_type: VehicleType::Winger,
        ac_status: AcStatus::Ac,
        status: VehicleStatus::Active,
    },
];

impl SampleVehicle {
    fn to_insert(&self) -> Option<InsertVehicle> {
        let (y, m, d) = self.reg_date;
        Some(InsertVehicle {
            reg_no: self.reg_no.to_string(),
            make: self.make.to_string(),
            model: self.model.to_string(),
            mfg_year: self.mfg_year,
            reg_date: NaiveDate::from_ymd_opt(y, m, d)?,
            entity_name: self.entity_name.to_string(),
            running_site: Some(self.running_site.to_string()),
            engine_no: self.engine_no.to_string(),
            chassis_no: self.chassis_no.to_string(),
            seat_capacity: self.seat_capacity,
            vehicle_type: self.vehicle_type,
            ac_status: Some(self.ac_status),
            status: Some(self.status),
        })
    }
}

/// Insert the demo fleet, returning how many records were added
pub fn load_sample_vehicles(store: &VehiclesRepository) -> usize {
    SAMPLE_VEHICLES
        .iter()
        .filter_map(SampleVehicle::to_insert)
        .filter_map(|data| store.create(data))
        .count()
}
