pub mod configurator;
pub mod dealership;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod highlights;
pub mod lifestyle;
pub mod reviews;
pub mod spec_sheet;

// Anchor ids the hero buttons scroll to.
pub const GALLERY_ID: &str = "gallery";
pub const SPECS_ID: &str = "specs";
pub const DEALERSHIP_ID: &str = "dealership";
