//! Page components.

mod company;
mod home;

pub use company::CompanyPage;
pub use home::HomePage;
