pub mod category;
pub mod data;
pub mod info;
pub mod inventory;
pub mod recipe;
pub mod shopping;
pub mod tag;

pub use category::CategoryCommand;
pub use data::{ExportArgs, ImportArgs, ResetArgs};
pub use info::InfoArgs;
pub use inventory::InventoryCommand;
pub use recipe::RecipeCommand;
pub use shopping::ShoppingArgs;
pub use tag::TagCommand;
