//! Turning a table snapshot into one betting intent.
pub mod agent;
pub use agent::*;

pub mod baseline;
pub use baseline::*;

pub mod decision;
pub use decision::*;

pub mod entry;
pub use entry::*;

pub mod headsup;
pub use headsup::*;

pub mod intent;
pub use intent::*;

pub mod memory;
pub use memory::*;

pub mod snapshot;
pub use snapshot::*;
