pub mod orders;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Order routes ──
    // POST is the public quote-request form; everything else requires an
    // admin JWT via the AdminUser extractor.
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(orders::create_order))
            .route("", web::get().to(orders::get_orders))
            .route("/export", web::get().to(orders::export_orders))
            .route("/{id}", web::get().to(orders::get_order))
            .route("/{id}/status", web::put().to(orders::update_status))
            .route("/{id}/export", web::get().to(orders::export_order)),
    );
}
