//! Slot data repository for database operations.
//!
//! This module provides the `SlotRepository`, the store for bookable slots. Reads
//! convert entity models into domain models at the infrastructure boundary. The
//! only mutations are seed-time inserts and `try_transition`, the conditional
//! write every booking and cancellation goes through.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::slot::{NewSlotParam, Slot, SlotStatus, SlotTransition, TransitionOutcome},
};

/// Repository providing database operations for slots.
///
/// This struct holds a reference to the database connection and provides methods
/// for querying slots and applying conditional state transitions.
pub struct SlotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlotRepository<'a> {
    /// Creates a new SlotRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SlotRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a slot by its id.
    ///
    /// # Arguments
    /// - `id` - Opaque slot id
    ///
    /// # Returns
    /// - `Ok(Some(Slot))` - Slot found
    /// - `Ok(None)` - No slot with that id
    /// - `Err(AppError)` - Database error, or a stored record violating the
    ///   status/owner consistency invariant
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Slot>, AppError> {
        let entity = entity::prelude::Slot::find_by_id(id).one(self.db).await?;

        entity.map(Slot::from_entity).transpose()
    }

    /// Lists all available slots, sorted by date then time.
    ///
    /// A booked slot never appears in this projection, regardless of owner.
    ///
    /// # Returns
    /// - `Ok(Vec<Slot>)` - Available slots in schedule order
    /// - `Err(AppError)` - Database error during query
    pub async fn list_available(&self) -> Result<Vec<Slot>, AppError> {
        let entities = entity::prelude::Slot::find()
            .filter(entity::slot::Column::Booked.eq(false))
            .order_by_asc(entity::slot::Column::Date)
            .order_by_asc(entity::slot::Column::Time)
            .all(self.db)
            .await?;

        entities.into_iter().map(Slot::from_entity).collect()
    }

    /// Lists the slots currently booked by the given user, sorted by date then time.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Slot>)` - The user's booked slots in schedule order
    /// - `Err(AppError)` - Database error during query
    pub async fn list_booked_by(&self, user_id: i32) -> Result<Vec<Slot>, AppError> {
        let entities = entity::prelude::Slot::find()
            .filter(entity::slot::Column::Booked.eq(true))
            .filter(entity::slot::Column::BookedBy.eq(user_id))
            .order_by_asc(entity::slot::Column::Date)
            .order_by_asc(entity::slot::Column::Time)
            .all(self.db)
            .await?;

        entities.into_iter().map(Slot::from_entity).collect()
    }

    /// Counts all slots.
    ///
    /// Used by startup seeding to decide whether the schedule needs to be
    /// populated.
    ///
    /// # Returns
    /// - `Ok(count)` - Total number of slots
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Slot::find().count(self.db).await
    }

    /// Inserts a batch of new slots, all starting available.
    ///
    /// # Arguments
    /// - `params` - Slot creation parameters; an empty batch is a no-op
    ///
    /// # Returns
    /// - `Ok(())` - All slots inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(&self, params: Vec<NewSlotParam>) -> Result<(), DbErr> {
        if params.is_empty() {
            return Ok(());
        }

        let models = params.into_iter().map(|param| entity::slot::ActiveModel {
            id: ActiveValue::Set(param.id),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            court: ActiveValue::Set(param.court),
            price: ActiveValue::Set(param.price),
            duration: ActiveValue::Set(param.duration),
            booked: ActiveValue::Set(false),
            booked_by: ActiveValue::Set(None),
            booked_at: ActiveValue::Set(None),
        });

        entity::prelude::Slot::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Atomically transitions a slot between booking states.
    ///
    /// The transition is a single conditional `UPDATE` whose `WHERE` clause
    /// requires the current status to equal `expected` (and, for `Release`,
    /// the current owner to equal the releasing user). The database applies
    /// the row update atomically, so under concurrent calls with the same
    /// precondition at most one can win; the rest observe `Conflict`.
    ///
    /// Zero affected rows means the precondition failed: a follow-up read
    /// distinguishes an unknown id from a state mismatch. No mutation has
    /// happened in either case.
    ///
    /// # Arguments
    /// - `id` - Opaque slot id
    /// - `expected` - Status the slot must currently have
    /// - `transition` - State change to apply when the precondition holds
    ///
    /// # Returns
    /// - `Ok(TransitionOutcome::Applied(Slot))` - Precondition held, slot updated
    /// - `Ok(TransitionOutcome::Conflict)` - Slot exists but its state did not match
    /// - `Ok(TransitionOutcome::NotFound)` - No slot with that id
    /// - `Err(AppError)` - Database error during update or follow-up read
    pub async fn try_transition(
        &self,
        id: &str,
        expected: SlotStatus,
        transition: SlotTransition,
    ) -> Result<TransitionOutcome, AppError> {
        let mut update = entity::prelude::Slot::update_many()
            .filter(entity::slot::Column::Id.eq(id))
            .filter(entity::slot::Column::Booked.eq(expected.is_booked()));

        match transition {
            SlotTransition::Book { user_id, booked_at } => {
                update = update
                    .col_expr(entity::slot::Column::Booked, Expr::value(true))
                    .col_expr(entity::slot::Column::BookedBy, Expr::value(Some(user_id)))
                    .col_expr(
                        entity::slot::Column::BookedAt,
                        Expr::value(Some(booked_at)),
                    );
            }
            SlotTransition::Release { user_id } => {
                update = update
                    .filter(entity::slot::Column::BookedBy.eq(user_id))
                    .col_expr(entity::slot::Column::Booked, Expr::value(false))
                    .col_expr(
                        entity::slot::Column::BookedBy,
                        Expr::value(Option::<i32>::None),
                    )
                    .col_expr(
                        entity::slot::Column::BookedAt,
                        Expr::value(Option::<chrono::DateTime<chrono::Utc>>::None),
                    );
            }
        }

        let result = update.exec(self.db).await?;

        if result.rows_affected == 0 {
            return match entity::prelude::Slot::find_by_id(id).one(self.db).await? {
                Some(_) => Ok(TransitionOutcome::Conflict),
                None => Ok(TransitionOutcome::NotFound),
            };
        }

        let entity = entity::prelude::Slot::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Slot {} missing after transition", id))
            })?;

        Ok(TransitionOutcome::Applied(Slot::from_entity(entity)?))
    }
}
