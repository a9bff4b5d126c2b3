mod health_check;
mod helpers;
mod home;
mod waitlist;

pub use health_check::health_check;
pub use helpers::{e500, error_chain_fmt};
pub use home::home;
pub use waitlist::{FormData, join_waitlist};
