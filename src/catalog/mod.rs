pub mod image;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::CatalogError;
use crate::models::hotel::Hotel;

use self::image::ImageCache;

const BUNDLED_HOTELS: &str = include_str!("../../data/hotels.json");
const BUNDLED_CITIES: &str = include_str!("../../data/cities.json");

/// Read-only hotel and city data, loaded once at start-up.
#[derive(Debug)]
pub struct Catalog {
    hotels: Vec<Hotel>,
    cities: Vec<String>,
    images: ImageCache,
}

impl Catalog {
    pub fn new(hotels: Vec<Hotel>, cities: Vec<String>) -> Self {
        Self {
            hotels,
            cities,
            images: ImageCache::new(),
        }
    }

    /// Builds the catalog from the bundled datasets, or from the files named
    /// in `config` when set.
    pub fn load(config: &Config) -> Result<Self, CatalogError> {
        let hotels: Vec<Hotel> = match &config.hotels_file {
            Some(path) => parse("hotels", &read(path)?)?,
            None => parse("hotels", BUNDLED_HOTELS)?,
        };
        let cities: Vec<String> = match &config.cities_file {
            Some(path) => parse("cities", &read(path)?)?,
            None => parse("cities", BUNDLED_CITIES)?,
        };

        Ok(Self::new(hotels, cities))
    }

    pub fn hotel_count(&self) -> usize {
        self.hotels.len()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn list_all(&self) -> Vec<Hotel> {
        self.hotels.iter().map(|h| self.resolve_image(h)).collect()
    }

    /// Hotels whose city equals `city` ignoring case. The query is not trimmed.
    pub fn list_by_city(&self, city: &str) -> Vec<Hotel> {
        let city = city.to_lowercase();
        self.hotels
            .iter()
            .filter(|h| h.city.to_lowercase() == city)
            .map(|h| self.resolve_image(h))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Hotel> {
        self.hotels
            .iter()
            .find(|h| h.id == id)
            .map(|h| self.resolve_image(h))
    }

    /// City names containing `query` ignoring case, in list order.
    ///
    /// An empty query matches every city; callers are expected to skip the
    /// lookup for blank input.
    pub fn search_city_names(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.cities
            .iter()
            .filter(|c| c.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    fn resolve_image(&self, hotel: &Hotel) -> Hotel {
        let mut hotel = hotel.clone();
        if hotel.image.as_deref().map_or(true, str::is_empty) {
            hotel.image = Some(self.images.get_or_assign(&hotel.id).to_string());
        }
        hotel
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(dataset: &'static str, raw: &str) -> Result<T, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse { dataset, source })
}
