pub mod prelude;

pub mod good;
pub mod order;
pub mod task;
pub mod user;
