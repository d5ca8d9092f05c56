pub mod geo;
pub mod marker;
pub mod path;
pub mod store;
