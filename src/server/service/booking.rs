//! Booking engine: the per-slot state machine.
//!
//! A slot moves between exactly two states, `Available` and `Booked`. Booking
//! claims an available slot for the caller; cancelling releases a booked slot,
//! but only for its owner. Every mutation goes through the slot repository's
//! conditional transition, whose precondition decides races: of two concurrent
//! attempts at the same transition, exactly one wins and the other observes a
//! conflict.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::slot::SlotRepository,
    error::{booking::BookingError, AppError},
    model::slot::{Slot, SlotStatus, SlotTransition, TransitionOutcome},
};

/// Service enforcing the booking state machine and ownership rules.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books an available slot for the given user.
    ///
    /// Performs a single conditional transition from `Available` to `Booked`,
    /// setting the owner and the booking timestamp. Losing a race against
    /// another booking attempt is the expected `AlreadyBooked` outcome, not an
    /// internal error; retrying it changes nothing.
    ///
    /// # Arguments
    /// - `slot_id` - Id of the slot to book
    /// - `user_id` - Id of the authenticated caller
    ///
    /// # Returns
    /// - `Ok(Slot)` - The updated slot, now booked by the caller
    /// - `Err(AppError::BookingErr(SlotNotFound))` - Unknown slot id
    /// - `Err(AppError::BookingErr(AlreadyBooked))` - Slot was not available at transition time
    /// - `Err(AppError)` - Store failure
    pub async fn book(&self, slot_id: &str, user_id: i32) -> Result<Slot, AppError> {
        let repo = SlotRepository::new(self.db);

        let outcome = repo
            .try_transition(
                slot_id,
                SlotStatus::Available,
                SlotTransition::Book {
                    user_id,
                    booked_at: Utc::now(),
                },
            )
            .await?;

        match outcome {
            TransitionOutcome::Applied(slot) => Ok(slot),
            TransitionOutcome::Conflict => {
                Err(BookingError::AlreadyBooked(slot_id.to_string()).into())
            }
            TransitionOutcome::NotFound => {
                Err(BookingError::SlotNotFound(slot_id.to_string()).into())
            }
        }
    }

    /// Cancels the caller's booking of a slot.
    ///
    /// The ownership check happens before the store mutation: the current slot
    /// is loaded, its status and owner verified, and only then is the
    /// conditional transition attempted. The store's answer remains
    /// authoritative over that earlier read: a conflict at transition time
    /// means the booking was already gone (e.g. cancelled concurrently), so
    /// there is nothing left for this caller to cancel.
    ///
    /// # Arguments
    /// - `slot_id` - Id of the slot whose booking to cancel
    /// - `user_id` - Id of the authenticated caller
    ///
    /// # Returns
    /// - `Ok(Slot)` - The updated slot, available again with owner and timestamp cleared
    /// - `Err(AppError::BookingErr(SlotNotFound))` - Unknown slot id
    /// - `Err(AppError::BookingErr(NotBooked))` - No active booking at check or transition time
    /// - `Err(AppError::BookingErr(NotOwner))` - Booking belongs to another user
    /// - `Err(AppError)` - Store failure
    pub async fn cancel(&self, slot_id: &str, user_id: i32) -> Result<Slot, AppError> {
        let repo = SlotRepository::new(self.db);

        let slot = repo
            .get_by_id(slot_id)
            .await?
            .ok_or_else(|| BookingError::SlotNotFound(slot_id.to_string()))?;

        if slot.status != SlotStatus::Booked {
            return Err(BookingError::NotBooked(slot_id.to_string()).into());
        }
        if slot.booked_by != Some(user_id) {
            return Err(BookingError::NotOwner(slot_id.to_string()).into());
        }

        let outcome = repo
            .try_transition(
                slot_id,
                SlotStatus::Booked,
                SlotTransition::Release { user_id },
            )
            .await?;

        match outcome {
            TransitionOutcome::Applied(slot) => Ok(slot),
            TransitionOutcome::Conflict => Err(BookingError::NotBooked(slot_id.to_string()).into()),
            // Slots are never deleted; a vanished id after a successful read is
            // reported the same way as an unknown id.
            TransitionOutcome::NotFound => {
                Err(BookingError::SlotNotFound(slot_id.to_string()).into())
            }
        }
    }
}
