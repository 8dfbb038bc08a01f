mod about;
mod hero;
pub mod model;

pub use about::About;
pub use hero::Hero;
