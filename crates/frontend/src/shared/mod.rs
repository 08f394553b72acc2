pub mod bootstrap;
pub mod config;
pub mod context;
pub mod control;
pub mod date_utils;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod format;
pub mod forms;
pub mod html;
pub mod http;
pub mod notify;
