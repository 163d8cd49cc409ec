//! 数据模型模块

pub mod auth;
pub mod chirp;
pub mod user;
