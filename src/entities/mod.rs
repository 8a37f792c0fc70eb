pub mod category;
pub mod product;

pub use category::{Entity as Category, Model as CategoryModel};
pub use product::{Entity as Product, Model as ProductModel};
