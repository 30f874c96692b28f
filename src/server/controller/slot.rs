use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        slot::{BookSlotDto, BookedSlotDto, SlotDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{booking::BookingService, slot::SlotQueryService},
        state::AppState,
    },
};

pub static SLOT_TAG: &str = "slot";

#[utoipa::path(
    get,
    path = "/api/slots",
    tag = SLOT_TAG,
    responses(
        (status = 200, description = "Available slots sorted by date then time", body = Vec<SlotDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_slots(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let slots = SlotQueryService::new(&state.db).list_available().await?;

    let dtos: Vec<SlotDto> = slots.into_iter().map(|slot| slot.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/slots/book",
    tag = SLOT_TAG,
    request_body = BookSlotDto,
    responses(
        (status = 200, description = "Slot booked for the caller", body = BookedSlotDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "Slot already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_slot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BookSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let slot = BookingService::new(&state.db)
        .book(&payload.slot_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookedSlotDto {
            message: "Slot booked successfully".to_string(),
            slot: slot.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/slots/cancel/{slot_id}",
    tag = SLOT_TAG,
    params(
        ("slot_id" = String, Path, description = "Id of the slot whose booking to cancel")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "No active booking for this slot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(slot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    BookingService::new(&state.db)
        .cancel(&slot_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Booking cancelled successfully".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/slots/mine",
    tag = SLOT_TAG,
    responses(
        (status = 200, description = "Caller's booked slots sorted by date then time", body = Vec<SlotDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let slots = SlotQueryService::new(&state.db)
        .list_booked_by(user.id)
        .await?;

    let dtos: Vec<SlotDto> = slots.into_iter().map(|slot| slot.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
