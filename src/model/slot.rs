use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SlotDto {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub court: String,
    pub price: i32,
    pub duration: String,
    pub booked: bool,
    pub booked_by: Option<i32>,
    pub booked_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookSlotDto {
    pub slot_id: String,
}

/// Response body for a successful booking: a confirmation message plus the
/// updated slot.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookedSlotDto {
    pub message: String,
    pub slot: SlotDto,
}
