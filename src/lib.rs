// ============================================================================
// NAIVEDYA LUNCH HOME - bilingual restaurant site (Yew + WASM)
// ============================================================================
// - components: Yew function components (header, sections, footer)
// - context:    language provider (EN / MR, persisted in localStorage)
// - hooks:      menu loading and menu search/filter state
// - services:   menu fetch-with-fallback, outbound links, scrolling
// - models:     menu documents (current + legacy), contact, sections
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on `<body>`
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🍛 Naivedya Lunch Home starting...");

    yew::Renderer::<components::App>::new().render();
}
