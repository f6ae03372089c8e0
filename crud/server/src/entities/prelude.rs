pub use super::good::Entity as Good;
pub use super::order::Entity as Order;
pub use super::task::Entity as Task;
pub use super::user::Entity as User;
