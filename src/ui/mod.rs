pub mod app;
pub mod data;
pub mod data_page;
pub mod effects;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pages;
pub mod render;
pub mod route;
pub mod runtime;
pub mod sidebar;
pub mod table;
pub mod terminal_guard;
pub mod theme;
