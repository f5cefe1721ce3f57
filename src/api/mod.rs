pub mod client;
pub mod decoder;
pub mod endpoints;
pub mod models;
pub mod request;
pub mod transport;
