pub mod api;
pub mod commands;
pub mod form;
pub mod state;
pub mod ui;
