mod continent;
mod country;
mod home;
mod listing;
mod not_found;
mod region;

pub use continent::ContinentPage;
pub use country::CountryPage;
pub use home::Home;
pub use not_found::NotFound;
pub use region::RegionPage;
