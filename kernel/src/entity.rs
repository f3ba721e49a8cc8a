mod book;
mod cart;
mod category;
mod cover;
mod filter;
mod notification;
mod volume;

pub use self::{
    book::*, cart::*, category::*, cover::*, filter::*, notification::*, volume::*,
};
