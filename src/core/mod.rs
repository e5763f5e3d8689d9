pub mod error;
pub mod logger;
pub mod config;
pub mod default_configuration;

pub mod phone;
pub mod contact;
pub mod repository;
pub mod contact_store;

pub(crate) use error::Result;
