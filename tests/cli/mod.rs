pub mod support;

mod assign;
mod config;
mod contacts;
mod fetch;
mod logging;
mod projects;
mod results;
