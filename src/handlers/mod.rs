//! HTTP handlers

pub mod chat;
pub mod health;
pub mod policies;
pub mod risks;
