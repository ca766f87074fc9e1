mod escrow;

pub use escrow::{Asset, Escrow};
