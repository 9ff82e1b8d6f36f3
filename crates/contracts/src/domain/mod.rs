pub mod a001_event;
pub mod common;
