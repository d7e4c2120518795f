pub mod enumerate;
pub use enumerate::*;

pub mod estimator;
pub use estimator::*;

pub mod outcome;
pub use outcome::*;

pub mod potential;
pub use potential::*;
