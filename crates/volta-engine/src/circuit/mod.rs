pub mod battery;
pub mod layout;
pub mod path;
