pub mod axis;
pub mod data;
pub mod plot_configs;
pub mod series;

// Re-export everything for convenience
pub use axis::*;
pub use data::*;
pub use plot_configs::*;
pub use series::*;
