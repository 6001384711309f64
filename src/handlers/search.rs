use crate::models::search::{SearchCriteria, ValidationOutcome};
use crate::validation::validate_search_form;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use url::form_urlencoded;

pub const UNREADABLE_SEARCH: &str = "Search request could not be read";

/// Results-view location for an accepted search.
pub fn results_location(criteria: &SearchCriteria) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("city", &criteria.city)
        .append_pair("checkin", &criteria.check_in)
        .append_pair("checkout", &criteria.check_out)
        .append_pair("guests", &criteria.guests.to_string())
        .finish();
    format!("/hotels?{}", query)
}

pub async fn submit_search(body: web::Json<SearchCriteria>) -> impl Responder {
    let outcome = validate_search_form(&body);

    if !outcome.is_valid {
        log::warn!("Rejected search: {}", outcome.errors.join("; "));
        return HttpResponse::BadRequest().json(outcome);
    }

    HttpResponse::Ok().json(serde_json::json!({
        "isValid": true,
        "errors": outcome.errors,
        "redirect": results_location(&body),
    }))
}

/// Answers undecodable search bodies with the same shape as a failed
/// validation.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Unreadable search body: {}", err);
    let outcome = ValidationOutcome {
        is_valid: false,
        errors: vec![UNREADABLE_SEARCH.to_string()],
    };
    let response = HttpResponse::BadRequest().json(outcome);
    InternalError::from_response(err, response).into()
}
