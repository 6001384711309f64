pub mod hotel;
pub mod search;
pub mod stay;
