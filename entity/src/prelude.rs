pub use super::book::Entity as Book;
pub use super::member::Entity as Member;
pub use super::order::Entity as Order;
