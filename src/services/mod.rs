pub mod products_view;

pub use products_view::{LoadStage, ProductsView};
