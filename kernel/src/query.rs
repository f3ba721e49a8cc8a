mod cart;
mod volume;

pub use self::{cart::*, volume::*};
