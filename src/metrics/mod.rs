pub mod aggression;
pub use aggression::*;

pub mod risk;
pub use risk::*;
