pub mod app_state;
pub mod displayed_product;
pub mod product;
pub mod region;

pub use app_state::AppState;
pub use displayed_product::DisplayedProduct;
pub use product::{Product, Products, SpotPrice};
pub use region::Region;
