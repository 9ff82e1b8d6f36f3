pub mod a001_event;
