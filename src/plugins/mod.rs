pub mod engine_plugin;
pub mod slots_plugin;
pub mod ui_plugin;
