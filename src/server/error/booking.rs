use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors produced by the booking state machine.
///
/// Every variant is terminal for the call that produced it; there is no
/// internal retry. `AlreadyBooked` is the expected outcome of a lost race,
/// and the sanctioned client reaction is to re-fetch availability rather
/// than retry the same slot.
#[derive(Error, Debug)]
pub enum BookingError {
    /// The slot id does not resolve to any slot.
    ///
    /// Results in a 404 Not Found response.
    #[error("Slot {0} does not exist")]
    SlotNotFound(String),

    /// The slot was not available at transition time.
    ///
    /// Results in a 409 Conflict response.
    #[error("Slot {0} is already booked")]
    AlreadyBooked(String),

    /// Cancel attempted on a slot with no active booking.
    ///
    /// Results in a 409 Conflict response.
    #[error("Slot {0} has no active booking")]
    NotBooked(String),

    /// Cancel attempted by a user who does not own the booking.
    ///
    /// Distinguished from `SlotNotFound` and `NotBooked` so the caller knows
    /// the slot exists and is booked, just not by them. Results in a 403
    /// Forbidden response.
    #[error("Slot {0} is booked by another user")]
    NotOwner(String),
}

/// Converts booking errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For unknown slot ids
/// - 409 Conflict - For booked slots and cancels with nothing to cancel
/// - 403 Forbidden - For cancels by non-owners
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            Self::SlotNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Slot not found".to_string(),
                }),
            )
                .into_response(),
            Self::AlreadyBooked(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Slot already booked".to_string(),
                }),
            )
                .into_response(),
            Self::NotBooked(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "No active booking for this slot".to_string(),
                }),
            )
                .into_response(),
            Self::NotOwner(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You can only cancel your own bookings".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
