//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, vehicles};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet Inventory API",
        version = "1.0.0",
        description = "Vehicle fleet inventory REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "Fleet API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
    ),
    components(
        schemas(
            // Vehicles
            crate::models::vehicle::Vehicle,
            crate::models::vehicle::InsertVehicle,
            crate::models::vehicle::UpdateVehicle,
            crate::models::enums::VehicleType,
            crate::models::enums::VehicleStatus,
            crate::models::enums::SeatCapacityType,
            crate::models::filter::VehicleQuery,
            crate::models::validation::FieldError,
            crate::api::MessageResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "vehicles", description = "Fleet vehicle management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
