mod book;
mod cart;
mod cover;

pub use self::{book::*, cart::*, cover::*};
