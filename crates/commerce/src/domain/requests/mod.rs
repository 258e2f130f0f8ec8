mod order;
mod product;
mod user;

pub use self::order::UpdateOrderRequest;
pub use self::product::{CreateProductRequest, SearchProducts};
pub use self::user::SearchUsers;
