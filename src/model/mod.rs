//! Model layer - routing data, navigation and presentation state
//!
//! - `RouteTable` / `PageId` - the static path table
//! - `Navigator` - the navigation capability handed to pages
//! - `GestureCatalog` - records behind the tutorial page
//! - `LocationHistory` - visited locations for Back
//! - `ModalStack` - modal overlay management

pub mod catalog;
pub mod location;
pub mod modal;
pub mod navigation;
pub mod route;

pub use catalog::{CatalogPreset, GestureCatalog, GestureDescription};
pub use location::LocationHistory;
pub use modal::{Modal, ModalStack};
pub use navigation::Navigator;
pub use route::{PageId, RouteTable};
