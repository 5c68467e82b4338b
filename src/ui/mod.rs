mod app_layout;
mod help_popup;
mod status_bar;
mod styles;

pub use app_layout::render;
