//! Inventory source seam for hostsync
//!
//! The core treats fetching as a single blocking call that yields a finite
//! list of records or fails outright; no retries happen here.

pub mod error;
pub mod source;

pub use error::{Error, Result};
pub use hostsync_content::HostRecord;
pub use source::{FileInventory, InventorySource, StaticInventory};
