use crate::catalog::Catalog;
use crate::error::ErrorResponse;
use crate::models::hotel::HotelListing;
use crate::models::search::SearchParams;
use crate::models::stay::Stay;
use actix_web::{web, HttpResponse, Responder};

pub async fn get_hotels(
    catalog: web::Data<Catalog>,
    params: web::Query<SearchParams>,
) -> impl Responder {
    let hotels = match params.city.as_deref().filter(|c| !c.is_empty()) {
        Some(city) => catalog.list_by_city(city),
        None => catalog.list_all(),
    };

    let stay = Stay::from_params(&params);
    log::debug!(
        "Found {} hotels for city={:?} ({} nights)",
        hotels.len(),
        params.city,
        stay.nights
    );

    let listings: Vec<HotelListing> = hotels.into_iter().map(|h| stay.price(h)).collect();

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "count": listings.len(),
        "data": listings,
        "nights": stay.nights,
        "guests": stay.guests,
    }))
}

pub async fn get_hotel_by_id(
    catalog: web::Data<Catalog>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match catalog.find_by_id(&id) {
        Some(hotel) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "data": hotel
        })),
        None => {
            log::warn!("Hotel {} not found", id);
            HttpResponse::NotFound().json(ErrorResponse::new("Hotel not found"))
        }
    }
}
