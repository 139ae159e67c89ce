pub mod check;
pub mod config;
pub mod download;
pub mod ics;
pub mod links;
