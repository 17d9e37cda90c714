use super::error::ApiError;
use super::params::ListParams;
use super::AppState;
use crate::car_actor::CarError;
use crate::model::{CarId, CarPayload};
use crate::query::{self, QueryRequest};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, info, instrument};

type Id = Result<Path<u32>, PathRejection>;
type Body = Result<Json<CarPayload>, JsonRejection>;

#[instrument(skip_all)]
pub async fn list_cars(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let request = QueryRequest::try_from(params)?;
    debug!(?request, "Running car query");

    let cars = state.repo.list().await?;
    let page = query::run(cars, &request, (state.today)());

    Ok(match page.meta {
        Some(meta) => Json(json!({ "data": page.items, "pagination": meta })).into_response(),
        None => Json(page.items).into_response(),
    })
}

#[instrument(skip_all)]
pub async fn get_car(State(state): State<AppState>, id: Id) -> Result<Response, ApiError> {
    let Path(id) = id?;
    match state.repo.get(CarId(id)).await? {
        Some(car) => Ok(Json(car).into_response()),
        None => Err(CarError::NotFound(id.to_string()).into()),
    }
}

#[instrument(skip_all)]
pub async fn create_car(State(state): State<AppState>, body: Body) -> Result<Response, ApiError> {
    let Json(payload) = body?;
    let car = state.repo.create(payload).await?;
    info!(car_id = %car.id, "Car created");
    Ok((StatusCode::CREATED, Json(car)).into_response())
}

#[instrument(skip_all)]
pub async fn replace_car(
    State(state): State<AppState>,
    id: Id,
    body: Body,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let Json(payload) = body?;
    let car = state.repo.replace(CarId(id), payload).await?;
    info!(car_id = %car.id, "Car replaced");
    Ok(Json(car).into_response())
}

#[instrument(skip_all)]
pub async fn patch_car(
    State(state): State<AppState>,
    id: Id,
    body: Body,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let car = state.repo.patch(CarId(id), patch).await?;
    info!(car_id = %car.id, "Car patched");
    Ok(Json(car).into_response())
}

#[instrument(skip_all)]
pub async fn delete_car(State(state): State<AppState>, id: Id) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let car = state.repo.delete(CarId(id)).await?;
    info!(car_id = %car.id, "Car deleted");
    Ok(Json(json!({ "message": "Car deleted successfully", "deletedCar": car })).into_response())
}

#[instrument(skip_all)]
pub async fn expiring_insurance(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cars = state.repo.list().await?;
    let report = query::expiring_insurance(&cars, (state.today)(), state.expiring_window_days);
    Ok(Json(report).into_response())
}
