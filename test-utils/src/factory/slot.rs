//! Slot factory for creating test slot entities.
//!
//! This module provides factory methods for creating slot entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern, including creating slots that are already booked.

use crate::factory::helpers::next_id;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test slots with customizable fields.
///
/// Provides a builder pattern for creating slot entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::slot::SlotFactory;
///
/// let slot = SlotFactory::new(&db)
///     .time("18:00")
///     .court("Court 2")
///     .price(1200)
///     .build()
///     .await?;
/// ```
pub struct SlotFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    date: NaiveDate,
    time: String,
    court: String,
    price: i32,
    duration: String,
    booked_by: Option<i32>,
    booked_at: Option<DateTime<Utc>>,
}

impl<'a> SlotFactory<'a> {
    /// Creates a new SlotFactory with default values.
    ///
    /// Defaults:
    /// - id: `"slot-{id}"` where id is auto-incremented
    /// - date: today (UTC)
    /// - time: `"06:00"`
    /// - court: `"Court 1"`, price: `1000`, duration: `"1 hour"`
    /// - not booked
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SlotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("slot-{}", id),
            date: Utc::now().date_naive(),
            time: "06:00".to_string(),
            court: "Court 1".to_string(),
            price: 1000,
            duration: "1 hour".to_string(),
            booked_by: None,
            booked_at: None,
        }
    }

    /// Sets the slot identifier.
    ///
    /// # Arguments
    /// - `id` - Opaque slot id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the calendar date of the slot.
    ///
    /// # Arguments
    /// - `date` - Calendar day of the slot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the time-of-day label of the slot.
    ///
    /// # Arguments
    /// - `time` - Label such as `"18:00"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Sets the court of the slot.
    ///
    /// # Arguments
    /// - `court` - Court identifier such as `"Court 2"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn court(mut self, court: impl Into<String>) -> Self {
        self.court = court.into();
        self
    }

    /// Sets the price of the slot.
    ///
    /// # Arguments
    /// - `price` - Price in the smallest currency unit
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    /// Marks the slot as booked by the given user.
    ///
    /// Sets the owner and a booking timestamp of now, so the created entity
    /// satisfies the status/owner/timestamp consistency expected by the domain.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn booked_by(mut self, user_id: i32) -> Self {
        self.booked_by = Some(user_id);
        self.booked_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the slot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::slot::Model)` - Created slot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::slot::Model, DbErr> {
        entity::slot::ActiveModel {
            id: ActiveValue::Set(self.id),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            court: ActiveValue::Set(self.court),
            price: ActiveValue::Set(self.price),
            duration: ActiveValue::Set(self.duration),
            booked: ActiveValue::Set(self.booked_by.is_some()),
            booked_by: ActiveValue::Set(self.booked_by),
            booked_at: ActiveValue::Set(self.booked_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available slot with default values.
///
/// Shorthand for `SlotFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::slot::Model)` - Created slot entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let slot = create_slot(&db).await?;
/// ```
pub async fn create_slot(db: &DatabaseConnection) -> Result<entity::slot::Model, DbErr> {
    SlotFactory::new(db).build().await
}

/// Creates a slot already booked by the given user.
///
/// Shorthand for `SlotFactory::new(db).booked_by(user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the owning user
///
/// # Returns
/// - `Ok(entity::slot::Model)` - Created slot entity with owner and timestamp set
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booked_slot(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::slot::Model, DbErr> {
    SlotFactory::new(db).booked_by(user_id).build().await
}
