pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod fetcher;
pub mod fixtures;
pub mod middleware;
pub mod models;
pub mod render;
pub mod response;
pub mod routes;
pub mod seed;
pub mod state;
pub mod telemetry;
pub mod time_format;
pub mod view;
