use super::*;

/// Tests booking an available slot.
///
/// Verifies that the caller becomes the owner and the consistency invariant
/// holds on the updated record: booked with both owner and timestamp set.
///
/// Expected: Ok(Slot) booked by the caller
#[tokio::test]
async fn books_available_slot_for_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let entity = factory::slot::create_slot(db).await?;

    let slot = BookingService::new(db).book(&entity.id, user.id).await?;

    assert_eq!(slot.status, SlotStatus::Booked);
    assert_eq!(slot.booked_by, Some(user.id));
    assert!(slot.booked_at.is_some());

    Ok(())
}

/// Tests booking a slot that another user already holds.
///
/// Verifies the lost-race outcome: the call fails with `AlreadyBooked` and
/// the original booking is untouched.
///
/// Expected: Err(AlreadyBooked), owner unchanged
#[tokio::test]
async fn fails_already_booked_when_slot_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let challenger = factory::user::create_user(db).await?;
    let entity = factory::slot::create_booked_slot(db, owner.id).await?;

    let result = BookingService::new(db).book(&entity.id, challenger.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::AlreadyBooked(_)))
    ));

    let stored = SlotRepository::new(db).get_by_id(&entity.id).await?.unwrap();
    assert_eq!(stored.booked_by, Some(owner.id));

    Ok(())
}

/// Tests booking with an unknown slot id.
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

    let result = BookingService::new(db).book("no-such-slot", user.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotNotFound(_)))
    ));

    Ok(())
}

/// Tests N concurrent booking attempts on one slot.
///
/// Eight users race to book the same slot. Exactly one caller must win;
/// every other caller observes `AlreadyBooked`, and the slot ends booked by
/// the winner.
///
/// Expected: one success, seven conflicts, owner == winner
#[tokio::test(flavor = "multi_thread")]
async fn exactly_one_winner_under_concurrent_attempts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let entity = factory::slot::create_slot(&db).await?;

    let mut users = Vec::new();
    for _ in 0..8 {
        users.push(factory::user::create_user(&db).await?);
    }

    let mut attempts = tokio::task::JoinSet::new();
    for user in &users {
        let task_db = db.clone();
        let slot_id = entity.id.clone();
        let user_id = user.id;
        attempts.spawn(async move {
            let result = BookingService::new(&task_db).book(&slot_id, user_id).await;
            (user_id, result)
        });
    }

    let mut winner = None;
    let mut conflicts = 0;
    while let Some(joined) = attempts.join_next().await {
        let (user_id, result) = joined.expect("booking task panicked");
        match result {
            Ok(slot) => {
                assert!(winner.is_none(), "more than one booking succeeded");
                assert_eq!(slot.booked_by, Some(user_id));
                winner = Some(user_id);
            }
            Err(AppError::BookingErr(BookingError::AlreadyBooked(_))) => conflicts += 1,
            Err(err) => return Err(err),
        }
    }

    assert_eq!(conflicts, 7);

    let stored = SlotRepository::new(&db)
        .get_by_id(&entity.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, SlotStatus::Booked);
    assert_eq!(stored.booked_by, winner);

    Ok(())
}
