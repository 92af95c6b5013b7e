pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod library;
pub mod metadata;
pub mod outcome;
pub mod sanitize;
pub mod scan;
