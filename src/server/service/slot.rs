//! Read-side slot projections.
//!
//! Queries go straight to the slot store on every call; there is no cache
//! whose staleness could advertise a booked slot as available. A stale
//! availability listing would only send clients into bookings the engine
//! rejects anyway, but reading committed state directly avoids provoking
//! those conflicts in the first place.

use sea_orm::DatabaseConnection;

use crate::server::{data::slot::SlotRepository, error::AppError, model::slot::Slot};

/// Service providing read-only slot projections.
pub struct SlotQueryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlotQueryService<'a> {
    /// Creates a new SlotQueryService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SlotQueryService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all available slots, sorted by date then time.
    ///
    /// # Returns
    /// - `Ok(Vec<Slot>)` - Available slots in schedule order
    /// - `Err(AppError)` - Store failure
    pub async fn list_available(&self) -> Result<Vec<Slot>, AppError> {
        SlotRepository::new(self.db).list_available().await
    }

    /// Lists the slots currently booked by the given user, sorted by date then time.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Slot>)` - The user's booked slots in schedule order
    /// - `Err(AppError)` - Store failure
    pub async fn list_booked_by(&self, user_id: i32) -> Result<Vec<Slot>, AppError> {
        SlotRepository::new(self.db).list_booked_by(user_id).await
    }
}
