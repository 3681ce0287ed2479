pub mod helpers;
pub mod products;
pub mod system;
