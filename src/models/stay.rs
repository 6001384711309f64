use serde::Serialize;

use crate::models::hotel::{Hotel, HotelListing};
use crate::models::search::{parse_leading_int, SearchParams};
use crate::validation::parse_calendar_date;

/// Length and party size of a requested stay, as read from the results-view
/// query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stay {
    pub nights: i64,
    pub guests: i64,
}

impl Default for Stay {
    fn default() -> Self {
        Self {
            nights: 1,
            guests: 1,
        }
    }
}

impl Stay {
    pub fn from_params(params: &SearchParams) -> Self {
        let nights = match (params.checkin.as_deref(), params.checkout.as_deref()) {
            (Some(check_in), Some(check_out)) => nights_between(check_in, check_out),
            _ => 1,
        };

        let guests = params
            .guests
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(1);

        Self { nights, guests }
    }

    pub fn price(&self, hotel: Hotel) -> HotelListing {
        let total_price = total_price(hotel.price, self.nights);
        HotelListing { hotel, total_price }
    }
}

/// Calendar days between the two dates, never less than one.
pub fn nights_between(check_in: &str, check_out: &str) -> i64 {
    match (parse_calendar_date(check_in), parse_calendar_date(check_out)) {
        (Some(check_in), Some(check_out)) => (check_out - check_in).num_days().max(1),
        _ => 1,
    }
}

pub fn total_price(price: u32, nights: i64) -> u64 {
    u64::from(price) * nights.max(1) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_nights_at_3500_totals_10500() {
        assert_eq!(total_price(3500, 3), 10500);
    }

    #[test]
    fn nights_counts_calendar_days() {
        assert_eq!(nights_between("2030-03-01", "2030-03-04"), 3);
        assert_eq!(nights_between("2030-02-27", "2030-03-02"), 3);
    }

    #[test]
    fn nights_is_clamped_to_one() {
        assert_eq!(nights_between("2030-03-04", "2030-03-01"), 1);
        assert_eq!(nights_between("2030-03-04", "2030-03-04"), 1);
        assert_eq!(nights_between("soon", "2030-03-04"), 1);
    }

    #[test]
    fn stay_defaults_when_params_missing() {
        assert_eq!(Stay::from_params(&SearchParams::default()), Stay::default());

        let params = SearchParams {
            checkin: Some("2030-03-01".into()),
            guests: Some("two".into()),
            ..Default::default()
        };
        assert_eq!(Stay::from_params(&params), Stay::default());
    }

    #[test]
    fn guests_use_leading_digits() {
        let params = SearchParams {
            guests: Some("2abc".into()),
            ..Default::default()
        };
        assert_eq!(Stay::from_params(&params).guests, 2);
    }

    #[test]
    fn stay_reads_dates_and_guests() {
        let params = SearchParams {
            city: Some("Goa".into()),
            checkin: Some("2030-03-01".into()),
            checkout: Some("2030-03-05".into()),
            guests: Some("3".into()),
        };
        assert_eq!(
            Stay::from_params(&params),
            Stay {
                nights: 4,
                guests: 3
            }
        );
    }

    #[test]
    fn listing_carries_total_price() {
        let hotel = Hotel {
            id: "2".into(),
            name: "Marine Drive Inn".into(),
            city: "Mumbai".into(),
            rating: 3.8,
            price: 3500,
            facilities: vec![],
            description: String::new(),
            image: None,
        };
        let stay = Stay {
            nights: 3,
            guests: 2,
        };

        let listing = stay.price(hotel);
        assert_eq!(listing.total_price, 10500);

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["totalPrice"], 10500);
        assert_eq!(json["name"], "Marine Drive Inn");
    }
}
