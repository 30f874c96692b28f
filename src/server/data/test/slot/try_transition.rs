use super::*;

/// Tests booking an available slot.
///
/// Verifies that the transition applies when the precondition holds: the slot
/// ends booked with the owner and timestamp set, and the persisted record
/// matches the returned one.
///
/// Expected: Ok(Applied) with status Booked
#[tokio::test]
async fn books_available_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::slot::create_slot(db).await?;

    let repo = SlotRepository::new(db);
    let outcome = repo
        .try_transition(
            &entity.id,
            SlotStatus::Available,
            SlotTransition::Book {
                user_id: user.id,
                booked_at: Utc::now(),
            },
        )
        .await?;

    let TransitionOutcome::Applied(slot) = outcome else {
        panic!("expected Applied outcome");
    };
    assert_eq!(slot.status, SlotStatus::Booked);
    assert_eq!(slot.booked_by, Some(user.id));
    assert!(slot.booked_at.is_some());

    let stored = repo.get_by_id(&entity.id).await?.unwrap();
    assert_eq!(stored, slot);

    Ok(())
}

/// Tests booking a slot that is already booked.
///
/// Verifies that a failed precondition performs no mutation: the original
/// owner keeps the slot.
///
/// Expected: Ok(Conflict) with the stored record unchanged
#[tokio::test]
async fn conflicts_when_booking_booked_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let challenger = factory::user::create_user(db).await?;
    let entity = factory::slot::create_booked_slot(db, owner.id).await?;

    let repo = SlotRepository::new(db);
    let before = repo.get_by_id(&entity.id).await?.unwrap();

    let outcome = repo
        .try_transition(
            &entity.id,
            SlotStatus::Available,
            SlotTransition::Book {
                user_id: challenger.id,
                booked_at: Utc::now(),
            },
        )
        .await?;

    assert!(matches!(outcome, TransitionOutcome::Conflict));

    let after = repo.get_by_id(&entity.id).await?.unwrap();
    assert_eq!(after, before);
    assert_eq!(after.booked_by, Some(owner.id));

    Ok(())
}

/// Tests a transition on an unknown slot id.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SlotRepository::new(db);
    let outcome = repo
        .try_transition(
            "no-such-slot",
            SlotStatus::Available,
            SlotTransition::Book {
                user_id: user.id,
                booked_at: Utc::now(),
            },
        )
        .await?;

    assert!(matches!(outcome, TransitionOutcome::NotFound));

    Ok(())
}

/// Tests releasing a booked slot as its owner.
///
/// Verifies that the slot returns to available with owner and timestamp
/// cleared.
///
/// Expected: Ok(Applied) with status Available
#[tokio::test]
async fn releases_booked_slot_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::slot::create_booked_slot(db, user.id).await?;

    let repo = SlotRepository::new(db);
    let outcome = repo
        .try_transition(
            &entity.id,
            SlotStatus::Booked,
            SlotTransition::Release { user_id: user.id },
        )
        .await?;

    let TransitionOutcome::Applied(slot) = outcome else {
        panic!("expected Applied outcome");
    };
    assert_eq!(slot.status, SlotStatus::Available);
    assert!(slot.booked_by.is_none());
    assert!(slot.booked_at.is_none());

    Ok(())
}

/// Tests releasing a slot that is not booked.
///
/// Expected: Ok(Conflict)
#[tokio::test]
async fn conflicts_when_releasing_available_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::slot::create_slot(db).await?;

    let repo = SlotRepository::new(db);
    let outcome = repo
        .try_transition(
            &entity.id,
            SlotStatus::Booked,
            SlotTransition::Release { user_id: user.id },
        )
        .await?;

    assert!(matches!(outcome, TransitionOutcome::Conflict));

    Ok(())
}

/// Tests that a release requires the stored owner to match.
///
/// A booking that changed hands between an ownership check and the write must
/// not be releasable by the previous reader: the owner is part of the update's
/// precondition, not only of the earlier check.
///
/// Expected: Ok(Conflict) with the booking left in place
#[tokio::test]
async fn conflicts_when_releasing_other_users_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let entity = factory::slot::create_booked_slot(db, owner.id).await?;

    let repo = SlotRepository::new(db);
    let outcome = repo
        .try_transition(
            &entity.id,
            SlotStatus::Booked,
            SlotTransition::Release { user_id: other.id },
        )
        .await?;

    assert!(matches!(outcome, TransitionOutcome::Conflict));

    let after = repo.get_by_id(&entity.id).await?.unwrap();
    assert_eq!(after.status, SlotStatus::Booked);
    assert_eq!(after.booked_by, Some(owner.id));

    Ok(())
}
