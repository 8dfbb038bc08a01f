pub mod model;
mod view;

pub use view::ProjectsSection;
