pub mod use_on_screen;
pub mod use_project_feed;

pub use use_on_screen::use_on_screen;
pub use use_project_feed::{use_project_feed, ProjectFeed};
