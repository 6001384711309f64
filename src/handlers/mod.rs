pub mod cities;
pub mod hotels;
pub mod search;

use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hotels")
            .route("", web::get().to(hotels::get_hotels))
            .route("/{id}", web::get().to(hotels::get_hotel_by_id)),
    )
    .route("/cities", web::get().to(cities::search_cities))
    .service(
        web::resource("/search")
            .app_data(web::JsonConfig::default().error_handler(search::json_error))
            .route(web::post().to(search::submit_search)),
    );
}
