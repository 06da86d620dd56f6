mod config;
mod groups;
mod laws;
