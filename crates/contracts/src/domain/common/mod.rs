pub mod highlights;
pub mod lenient;
pub mod tag_list;

pub use highlights::{Highlights, HighlightsError};
pub use tag_list::TagList;
