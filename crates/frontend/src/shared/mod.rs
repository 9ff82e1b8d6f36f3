pub mod api_utils;
pub mod dropdown;
pub mod icons;
pub mod modal;
pub mod notifications;
