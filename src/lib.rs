pub mod cache;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod models;
pub mod proto;
pub mod realtime;
pub mod services;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
