pub mod client;
pub mod location;
pub mod params;
pub mod responses;
