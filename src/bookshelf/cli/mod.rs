mod commands;
mod menu;
mod print;
mod prompt;
mod setup;

pub use commands::run;
