pub mod cart;
pub mod favorites;
pub mod products;
