pub mod normalize;
pub mod service;
pub mod transfer;
