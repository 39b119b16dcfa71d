pub mod doctor;
pub mod user;

pub use doctor::Doctor;
pub use user::{UserAddress, UserProfile};
