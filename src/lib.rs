pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod pages;
pub mod render;
pub mod services;

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Result;

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        Ok(Self { config, api })
    }
}
