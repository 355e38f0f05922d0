pub mod config;
pub mod controller;

pub use config::ChartConfig;
pub use controller::ChartController;
