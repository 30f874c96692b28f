//! Domain & parameter models for slot operations
//!
//! Defines the slot domain model with its booking status, the parameter and
//! transition types consumed by the slot repository, and conversions from the
//! entity model and into DTOs.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{model::slot::SlotDto, server::error::AppError};

/// Booking status of a slot.
///
/// A slot is either open for booking or claimed by exactly one user. There is
/// no pending or expired state in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Available,
    Booked,
}

impl SlotStatus {
    /// Maps the status to the persisted `booked` flag.
    pub fn is_booked(self) -> bool {
        matches!(self, Self::Booked)
    }
}

/// The slot domain model.
///
/// A bookable unit of time at a court. The owner and booking timestamp are
/// present exactly when the status is `Booked`; `from_entity` rejects records
/// that violate this.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub court: String,
    pub price: i32,
    pub duration: String,
    pub status: SlotStatus,
    pub booked_by: Option<i32>,
    pub booked_at: Option<DateTime<Utc>>,
}

impl Slot {
    /// Converts an entity model to the slot domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Slot)` - The converted slot domain model
    /// - `Err(AppError::InternalError)` - The stored record has an owner or
    ///   timestamp inconsistent with its booking status
    pub fn from_entity(entity: entity::slot::Model) -> Result<Self, AppError> {
        let status = if entity.booked {
            SlotStatus::Booked
        } else {
            SlotStatus::Available
        };

        let consistent = match status {
            SlotStatus::Booked => entity.booked_by.is_some() && entity.booked_at.is_some(),
            SlotStatus::Available => entity.booked_by.is_none() && entity.booked_at.is_none(),
        };
        if !consistent {
            return Err(AppError::InternalError(format!(
                "Slot {} has owner/timestamp inconsistent with its booking status",
                entity.id
            )));
        }

        Ok(Self {
            id: entity.id,
            date: entity.date,
            time: entity.time,
            court: entity.court,
            price: entity.price,
            duration: entity.duration,
            status,
            booked_by: entity.booked_by,
            booked_at: entity.booked_at,
        })
    }

    /// Converts the slot domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `SlotDto` - The converted slot DTO with the status flattened to a flag
    pub fn into_dto(self) -> SlotDto {
        SlotDto {
            id: self.id,
            date: self.date,
            time: self.time,
            court: self.court,
            price: self.price,
            duration: self.duration,
            booked: self.status.is_booked(),
            booked_by: self.booked_by,
            booked_at: self.booked_at,
        }
    }
}

/// Parameters for creating a new slot at seed time.
///
/// Seeded slots always start `Available`; there is no way to create a slot
/// that is already booked.
#[derive(Debug, Clone)]
pub struct NewSlotParam {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub court: String,
    pub price: i32,
    pub duration: String,
}

/// State change applied by a conditional transition.
///
/// `Book` claims the slot for a user at a given timestamp. `Release` clears
/// the claim and additionally requires the stored owner to equal `user_id`,
/// so a booking that changed hands between an ownership check and the write
/// can never be released by the previous owner.
#[derive(Debug, Clone)]
pub enum SlotTransition {
    Book {
        user_id: i32,
        booked_at: DateTime<Utc>,
    },
    Release {
        user_id: i32,
    },
}

/// Outcome of a conditional transition.
///
/// `Conflict` means the slot exists but its state did not match the expected
/// precondition at transition time; the store performed no mutation.
#[derive(Debug)]
pub enum TransitionOutcome {
    Applied(Slot),
    Conflict,
    NotFound,
}
