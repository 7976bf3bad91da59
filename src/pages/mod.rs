pub mod home;
pub mod not_found;
pub mod signup;

pub use home::HomePage;
pub use not_found::NotFound;
pub use signup::SignupPage;
