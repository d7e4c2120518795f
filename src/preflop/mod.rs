pub mod chen;
pub use chen::*;

pub mod odds;
pub use odds::*;
