pub mod config;
pub mod logging;
pub mod startup;
pub mod url_model;
