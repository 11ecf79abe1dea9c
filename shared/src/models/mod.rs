//! Resource models

mod item;
mod wishlist;

pub use item::{Item, ItemCreate};
pub use wishlist::{Wishlist, WishlistCreate, WishlistUpdate};
