mod feed_player;
mod lazy_tile;

pub use feed_player::*;
pub use lazy_tile::*;
