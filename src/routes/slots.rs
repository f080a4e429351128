use actix_web::{HttpResponse, post, web};

use crate::error::ApiError;
use crate::handlers;
use crate::models::request::SlotRequestBody;
use crate::state::AppState;

#[post("/check-available-slots")]
async fn check_available_slots(
    state: web::Data<AppState>,
    body: web::Json<SlotRequestBody>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner().validate()?;
    let response =
        handlers::slots::check_slot(&state.appointments, &state.travel, request).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(check_available_slots);
}
