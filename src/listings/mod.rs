mod category;
mod item;
mod store;

pub use category::{Category, ContainerBinding};
pub use item::ListingItem;
pub use store::ListingStore;
