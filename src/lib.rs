//! Terminal product dashboard.
//!
//! A sidebar-navigated shell with a Data route that pages through a remote
//! product catalog. The interesting parts live in:
//!
//! - [`api`] - query building and the HTTP fetch
//! - [`ui::data`] - the fetch lifecycle slice
//! - [`ui::table`] - the generic table state machine and cell rendering

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
