//! Hand-Off Block (HOB) list construction
//!
//! Early boot code uses this crate to describe memory layout and
//! configuration to a later boot stage. Records are appended to a single
//! contiguous list living in a pre-reserved region of physical memory, in the
//! binary format published by the UEFI Platform Initialization specification.
//! The consumer walks the finished list by raw offset arithmetic, so every
//! record is 8-byte aligned and the list always ends with exactly one
//! end-of-list record.
//!
//! The region is handed in as a byte buffer whose first byte corresponds to
//! the physical address where the free region begins. Nothing is ever freed
//! or moved once written.
//!
//! ```
//! use hoblist::{HobList, RegionConfig, ResourceAttributes, ResourceType};
//! use hoblist::addr::{Length, PhysAddress};
//!
//! let mut region = [0u8; 4096];
//! let config = RegionConfig::new(0x8000_0000, 4096, 0x8000_0000, 4096).unwrap();
//! let mut hobs = HobList::create(&mut region[..], config).unwrap();
//!
//! hobs.create_resource_descriptor_hob(
//!     ResourceType::SystemMemory,
//!     ResourceAttributes::PRESENT | ResourceAttributes::INITIALIZED,
//!     PhysAddress::from_raw(0x8000_0000),
//!     Length::from_raw(0x4000_0000),
//! )
//! .unwrap();
//!
//! assert_eq!(hobs.iter().count(), 2);
//! ```
#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod addr;
pub mod config;
mod error;
pub mod layout;
mod list;
mod producers;
mod raw;
pub mod walk;

pub use config::RegionConfig;
pub use error::{HobError, Result};
pub use layout::{
    BootMode, Guid, HobType, MemoryType, ResourceAttributes, ResourceType, HOB_ALIGNMENT,
    HOB_HANDOFF_TABLE_VERSION,
};
pub use list::{HobList, HobRef};
pub use producers::GuidAllocation;
pub use walk::{Hob, HobIter};
