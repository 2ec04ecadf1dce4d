pub mod interaction;
pub mod roll;
