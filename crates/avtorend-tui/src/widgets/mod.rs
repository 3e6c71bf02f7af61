//! Custom widget components

mod detail;
mod drawer;
mod fleet;
mod footer;
mod header;
mod hero;

pub use detail::VehicleDetail;
pub use drawer::NavDrawer;
pub use fleet::{format_price, FleetGrid, VehicleCard};
pub use footer::Footer;
pub use header::{MainHeader, BRAND};
pub use hero::{CategoryTabs, Hero};
