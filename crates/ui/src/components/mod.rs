mod country_tile;
mod footer;
mod map;
mod map_buttons;
mod map_selector;
mod navbar;
mod not_found;
mod status;

pub use country_tile::CountryTile;
pub use footer::Footer;
pub use map::WorldMap;
pub use map_buttons::MapButtons;
pub use map_selector::MapSelector;
pub use navbar::Navbar;
pub use not_found::{BackLink, NotFoundCard};
pub use status::{LoadError, Spinner, Stat};
