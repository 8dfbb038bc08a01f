mod navbar;
pub mod state;

pub use navbar::Navbar;
