pub mod command;
pub mod exec;
pub mod icon;
pub mod runtime;
pub mod server;
