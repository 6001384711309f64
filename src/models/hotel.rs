use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub rating: f32,
    pub price: u32,
    pub facilities: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A hotel as shown in search results, priced for the requested stay.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListing {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub total_price: u64,
}
