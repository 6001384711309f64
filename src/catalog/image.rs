use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

pub const HOTEL_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1512918728675-ed5a9ecdebfd?auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429?auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&w=600&q=80",
    "https://images.unsplash.com/photo-1509228468518-180dd4864904?auto=format&fit=crop&w=600&q=80",
];

/// Rolling `acc = code + ((acc << 5) - acc)` over the UTF-16 code units of
/// `id`. The shift wraps at 32 bits; the add and subtract do not.
pub fn id_hash(id: &str) -> i64 {
    id.encode_utf16().fold(0i64, |acc, code| {
        let shifted = (acc as i32).wrapping_shl(5);
        i64::from(code) + (i64::from(shifted) - acc)
    })
}

pub fn fallback_image(id: &str) -> &'static str {
    let index = (id_hash(id).unsigned_abs() % HOTEL_IMAGES.len() as u64) as usize;
    HOTEL_IMAGES[index]
}

/// Fallback images handed out so far, keyed by hotel id. Entries are only
/// ever added.
#[derive(Debug, Default)]
pub struct ImageCache {
    assigned: RwLock<HashMap<String, &'static str>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_assign(&self, id: &str) -> &'static str {
        if let Some(image) = self
            .assigned
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
        {
            return image;
        }

        let mut assigned = self
            .assigned
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *assigned
            .entry(id.to_string())
            .or_insert_with(|| fallback_image(id))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.assigned
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
