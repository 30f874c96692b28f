use super::*;

/// Tests that the listing contains exactly the caller's booked slots.
///
/// Expected: Ok with the caller's slots only, all owned by the caller
#[tokio::test]
async fn returns_only_callers_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;

    let slot_a1 = factory::slot::create_booked_slot(db, user_a.id).await?;
    let slot_a2 = factory::slot::create_booked_slot(db, user_a.id).await?;
    factory::slot::create_booked_slot(db, user_b.id).await?;
    factory::slot::create_slot(db).await?;

    let repo = SlotRepository::new(db);
    let slots = repo.list_booked_by(user_a.id).await?;

    assert_eq!(slots.len(), 2);
    assert!(slots.iter().all(|slot| slot.booked_by == Some(user_a.id)));
    assert!(slots.iter().any(|slot| slot.id == slot_a1.id));
    assert!(slots.iter().any(|slot| slot.id == slot_a2.id));

    Ok(())
}

/// Tests the listing for a user with no bookings.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_user_without_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;
    factory::slot::create_booked_slot(db, user_b.id).await?;

    let repo = SlotRepository::new(db);
    let slots = repo.list_booked_by(user_a.id).await?;

    assert!(slots.is_empty());

    Ok(())
}

/// Tests that a user's bookings are sorted by date, then time.
///
/// Expected: Ok with slots in schedule order regardless of insertion order
#[tokio::test]
async fn sorts_by_date_then_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let day1 = NaiveDate::from_ymd_opt(2026, 6, 11).unwrap();
    let day2 = NaiveDate::from_ymd_opt(2026, 6, 12).unwrap();

    let second = factory::slot::SlotFactory::new(db)
        .date(day1)
        .time("18:00")
        .booked_by(user.id)
        .build()
        .await?;
    let third = factory::slot::SlotFactory::new(db)
        .date(day2)
        .time("06:00")
        .booked_by(user.id)
        .build()
        .await?;
    let first = factory::slot::SlotFactory::new(db)
        .date(day1)
        .time("07:00")
        .booked_by(user.id)
        .build()
        .await?;

    let repo = SlotRepository::new(db);
    let slots = repo.list_booked_by(user.id).await?;

    let ids: Vec<&str> = slots.iter().map(|slot| slot.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![first.id.as_str(), second.id.as_str(), third.id.as_str()]
    );

    Ok(())
}
