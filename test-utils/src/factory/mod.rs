//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let slot = factory::slot::create_slot(&db).await?;
//!
//!     // Create a slot already booked by a user
//!     let booked = factory::slot::create_booked_slot(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let slot = factory::slot::SlotFactory::new(&db)
//!     .time("18:00")
//!     .court("Court 2")
//!     .price(1200)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `slot` - Create slot entities, available or booked
//! - `helpers` - Shared utilities such as unique ID generation

pub mod helpers;
pub mod slot;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use slot::{create_booked_slot, create_slot};
pub use user::create_user;
