mod footer;

pub use footer::{copyright_line, Footer};
