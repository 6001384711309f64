use crate::catalog::Catalog;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search_cities(
    catalog: web::Data<Catalog>,
    query: web::Query<CityQuery>,
) -> impl Responder {
    let cities = if query.q.trim().is_empty() {
        Vec::new()
    } else {
        catalog.search_city_names(&query.q)
    };

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": cities
    }))
}
