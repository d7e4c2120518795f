pub mod evaluate;
pub use evaluate::*;

pub mod rank;
pub use rank::*;
