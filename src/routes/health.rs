use actix_web::{HttpResponse, Responder, get, web};

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().body("GHL Smart Appointment Route is running successfully!")
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
