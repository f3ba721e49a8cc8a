mod cart;
mod catalog;
mod cover;

pub use self::{cart::*, catalog::*, cover::*};
