//! Request/response models

pub mod chat;
pub mod policy;
pub mod risk;

pub use chat::*;
pub use policy::*;
pub use risk::*;
