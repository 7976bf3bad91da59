pub mod header;
pub mod home_header;
pub mod integration_button;
pub mod project_card;
pub mod project_loader;
pub mod search_bar;

pub use header::Header;
pub use home_header::HomeHeader;
pub use integration_button::IntegrationButton;
pub use project_card::ProjectCard;
pub use project_loader::ProjectLoader;
pub use search_bar::{SearchBar, SearchTip};
