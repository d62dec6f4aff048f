pub mod domain;
pub mod error;
pub mod format;
pub mod notification;
