pub mod health;
pub mod slots;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    health::init(cfg);
    slots::init(cfg);
}
