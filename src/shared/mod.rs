pub mod middleware;
pub mod structs;
pub mod utility;

pub const USER_AGENT: &str = concat!("dicebot/", env!("CARGO_PKG_VERSION"));
