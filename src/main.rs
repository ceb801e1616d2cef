mod app;
mod audio;
mod catalog;
mod config;
mod controller;
mod http;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
