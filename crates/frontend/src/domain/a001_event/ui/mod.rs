pub mod create;
pub mod edit;
pub mod fields;
pub mod list;
