pub mod client;
pub mod methods;
pub mod models;
