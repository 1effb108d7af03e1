pub mod config;

pub use config::RuntimeConfig;
