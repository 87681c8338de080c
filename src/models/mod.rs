pub mod item;
pub mod turn;

pub use item::*;
pub use turn::*;
