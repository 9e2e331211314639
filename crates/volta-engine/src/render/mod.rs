pub mod projection;
pub mod snapshot;
