pub mod ban;
pub mod health;
pub mod key;
pub mod users;
