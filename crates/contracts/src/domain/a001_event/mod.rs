pub mod aggregate;
pub mod response;
