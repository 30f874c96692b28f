//! Courtbook Test Utils
//!
//! Shared testing utilities for the courtbook application: an in-memory SQLite
//! test context with a builder for its schema, and factories for seeding users
//! and slots.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_slot() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::user::create_user(db).await?;
//!     let slot = factory::slot::create_slot(db).await?;
//!     // Exercise the code under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
