pub mod config;
pub mod category;
pub mod trust;
pub mod profile;
pub mod loader;
pub mod error;
pub mod query;
pub mod web;
