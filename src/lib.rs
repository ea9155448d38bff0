pub mod activity;
pub mod cli;
pub mod error;
pub mod model;
pub mod record;
pub mod reset;
pub mod setup;
pub mod stats;
pub mod store;
pub mod weekly;
