//! Neighborhood catalog handler.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NEIGHBORHOODS, Neighborhood};

/// A selectable lunch neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodResponse {
    #[schema(example = "gangnam")]
    pub id: String,
    #[schema(example = "강남")]
    pub name: String,
    #[schema(example = 37.4979)]
    pub lat: f64,
    #[schema(example = 127.0276)]
    pub lng: f64,
}

impl From<&Neighborhood> for NeighborhoodResponse {
    fn from(hood: &Neighborhood) -> Self {
        Self {
            id: hood.id.to_owned(),
            name: hood.name.to_owned(),
            lat: hood.lat,
            lng: hood.lng,
        }
    }
}

/// The fixed neighborhood catalog, in display order.
#[utoipa::path(
    get,
    path = "/api/v1/neighborhoods",
    responses((status = 200, description = "Catalog", body = [NeighborhoodResponse])),
    tags = ["schedules"],
    operation_id = "listNeighborhoods",
    security([])
)]
#[get("/neighborhoods")]
pub async fn list_neighborhoods() -> web::Json<Vec<NeighborhoodResponse>> {
    web::Json(NEIGHBORHOODS.iter().map(NeighborhoodResponse::from).collect())
}
