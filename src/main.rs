// Prevent console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod error;
mod message;
mod models;
mod ops;
mod ui;
mod update;

use app::PdfStackApp;

pub fn main() -> iced::Result {
    human_panic::setup_panic!();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pdfstack=info")),
        )
        .init();

    iced::run(PdfStackApp::update, PdfStackApp::view)
}
