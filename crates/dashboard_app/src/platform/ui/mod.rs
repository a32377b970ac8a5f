pub mod render;
pub mod subviews;
