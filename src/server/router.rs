use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, auth as auth_dto, slot as slot_dto, user as user_dto},
    server::{
        controller::{auth, health, slot},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::signup,
        auth::login,
        auth::logout,
        auth::get_user,
        slot::get_available_slots,
        slot::book_slot,
        slot::cancel_booking,
        slot::get_my_bookings,
    ),
    components(schemas(
        api::ErrorDto,
        api::HealthDto,
        api::MessageDto,
        auth_dto::AuthenticatedDto,
        auth_dto::LoginDto,
        auth_dto::SignupDto,
        slot_dto::BookSlotDto,
        slot_dto::BookedSlotDto,
        slot_dto::SlotDto,
        user_dto::UserDto,
    )),
    tags(
        (name = "health", description = "Liveness checks"),
        (name = "auth", description = "Signup, login, and session management"),
        (name = "slot", description = "Slot availability and booking")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/slots", get(slot::get_available_slots))
        .route("/api/slots/book", post(slot::book_slot))
        .route("/api/slots/cancel/{slot_id}", delete(slot::cancel_booking))
        .route("/api/slots/mine", get(slot::get_my_bookings))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
