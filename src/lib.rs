pub mod cli;
pub mod command;
pub mod config;
pub mod game;
pub mod logging;
pub mod posts;
pub mod roster;
pub mod scorebook;
pub mod session;
pub mod util;
