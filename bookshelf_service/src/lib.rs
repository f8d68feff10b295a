pub mod author;
pub mod book;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod graphql;
pub mod model;
pub mod telemetry;

#[cfg(test)]
mod testing;
