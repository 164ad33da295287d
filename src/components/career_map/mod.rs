mod component;
mod connectors;
mod data;
mod details;
mod error;
mod layout;
mod reach;
mod render;
mod session;
mod state;
mod store;
mod types;

pub use component::CareerMapCanvas;
pub use data::load_career_data;
pub use details::DetailsPanel;
pub use types::DetailsEvent;
