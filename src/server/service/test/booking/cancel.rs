use super::*;

/// Tests the book-then-cancel round trip.
///
/// Verifies that cancelling restores the pre-booking state: status, owner,
/// and timestamp are indistinguishable from before the booking, and the slot
/// identity and schedule fields are untouched.
///
/// Expected: Ok with the slot back to its pre-booking state
#[tokio::test]
async fn cancel_restores_pre_booking_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::slot::create_slot(db).await?;

    let repo = SlotRepository::new(db);
    let before = repo.get_by_id(&entity.id).await?.unwrap();

    let service = BookingService::new(db);
    service.book(&entity.id, user.id).await?;
    let restored = service.cancel(&entity.id, user.id).await?;

    assert_eq!(restored, before);
    assert_eq!(restored.status, SlotStatus::Available);
    assert!(restored.booked_by.is_none());
    assert!(restored.booked_at.is_none());

    Ok(())
}

/// Tests cancelling a booking held by another user.
///
/// Verifies the ownership rule: the call fails with `NotOwner` and the
/// booking is untouched.
///
/// Expected: Err(NotOwner), status and owner unchanged
#[tokio::test]
async fn fails_not_owner_for_other_users_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let entity = factory::slot::create_booked_slot(db, owner.id).await?;

    let result = BookingService::new(db).cancel(&entity.id, other.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotOwner(_)))
    ));

    let stored = SlotRepository::new(db).get_by_id(&entity.id).await?.unwrap();
    assert_eq!(stored.status, SlotStatus::Booked);
    assert_eq!(stored.booked_by, Some(owner.id));

    Ok(())
}

/// Tests cancelling a slot that was never booked.
///
/// Expected: Err(NotBooked)
#[tokio::test]
async fn fails_not_booked_for_available_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::slot::create_slot(db).await?;

    let result = BookingService::new(db).cancel(&entity.id, user.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotBooked(_)))
    ));

    Ok(())
}

/// Tests cancelling with an unknown slot id.
///
/// Expected: Err(SlotNotFound)
#[tokio::test]
async fn fails_not_found_for_unknown_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = BookingService::new(db).cancel("no-such-slot", user.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotNotFound(_)))
    ));

    Ok(())
}

/// Tests the full booking lifecycle across two users.
///
/// Seeds one available slot, then: A books it (success) → B tries to book it
/// (`AlreadyBooked`) → B tries to cancel it (`NotOwner`) → A cancels it
/// (success, slot available again) → A cancels again (`NotBooked`).
///
/// Expected: each step produces exactly the documented outcome
#[tokio::test]
async fn full_booking_lifecycle_across_two_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;
    let entity = factory::slot::create_slot(db).await?;

    let service = BookingService::new(db);

    let booked = service.book(&entity.id, user_a.id).await?;
    assert_eq!(booked.status, SlotStatus::Booked);
    assert_eq!(booked.booked_by, Some(user_a.id));

    assert!(matches!(
        service.book(&entity.id, user_b.id).await,
        Err(AppError::BookingErr(BookingError::AlreadyBooked(_)))
    ));

    assert!(matches!(
        service.cancel(&entity.id, user_b.id).await,
        Err(AppError::BookingErr(BookingError::NotOwner(_)))
    ));

    let released = service.cancel(&entity.id, user_a.id).await?;
    assert_eq!(released.status, SlotStatus::Available);
    assert!(released.booked_by.is_none());

    assert!(matches!(
        service.cancel(&entity.id, user_a.id).await,
        Err(AppError::BookingErr(BookingError::NotBooked(_)))
    ));

    Ok(())
}

/// Tests that a cancel losing the race against another cancel reports `NotBooked`.
///
/// The booking is released out from under the caller, as a concurrent cancel
/// would do. Whether the loser observes the released state at its ownership
/// read or as a store conflict on its transition, the outcome is the same:
/// there is nothing left for this caller to cancel.
///
/// Expected: Err(NotBooked) for the loser
#[tokio::test]
async fn concurrent_cancel_loser_observes_not_booked() -> Result<(), AppError> {
    use crate::server::model::slot::{SlotTransition, TransitionOutcome};

    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::slot::create_booked_slot(db, user.id).await?;

    let repo = SlotRepository::new(db);
    let service = BookingService::new(db);

    // The engine's ownership read would pass here; release the booking
    // before its transition lands, as a concurrent cancel would.
    let outcome = repo
        .try_transition(
            &entity.id,
            SlotStatus::Booked,
            SlotTransition::Release { user_id: user.id },
        )
        .await?;
    assert!(matches!(outcome, TransitionOutcome::Applied(_)));

    let result = service.cancel(&entity.id, user.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotBooked(_)))
    ));

    Ok(())
}
