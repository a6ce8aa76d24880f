//! Bounds of the memory region a HOB list is built in.

use crate::addr::{Length, PhysAddress, PhysExtent};
use crate::error::{HobError, Result};

/// The reserved memory region and the free part of it the list is written
/// to, as decided by the boot stage that owns them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegionConfig {
    memory: PhysExtent,
    free: PhysExtent,
}

impl RegionConfig {
    /// All four values must be non-zero, neither range may wrap around the
    /// address space, and the free range must lie inside the memory range.
    ///
    /// Alignment of the bases is the caller's business.
    pub fn new(
        memory_base: u64,
        memory_length: u64,
        free_base: u64,
        free_length: u64,
    ) -> Result<Self> {
        let memory_base = PhysAddress::from_raw(memory_base);
        let free_base = PhysAddress::from_raw(free_base);
        if memory_base.is_zero() || free_base.is_zero() {
            return Err(HobError::BadParameters);
        }

        let memory = PhysExtent::new_checked(memory_base, Length::from_raw(memory_length))
            .ok_or(HobError::BadParameters)?;
        let free = PhysExtent::new_checked(free_base, Length::from_raw(free_length))
            .ok_or(HobError::BadParameters)?;

        if !memory.contains(free) {
            return Err(HobError::BadParameters);
        }

        Ok(Self { memory, free })
    }

    /// The whole reserved region.
    pub fn memory(&self) -> PhysExtent {
        self.memory
    }

    /// The part of the region the list is built in. Its base is where the
    /// handoff table goes.
    pub fn free(&self) -> PhysExtent {
        self.free
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bounds_are_rejected() {
        assert_eq!(
            RegionConfig::new(0, 0x1000, 0x1000, 0x1000),
            Err(HobError::BadParameters)
        );
        assert_eq!(
            RegionConfig::new(0x1000, 0, 0x1000, 0x1000),
            Err(HobError::BadParameters)
        );
        assert_eq!(
            RegionConfig::new(0x1000, 0x1000, 0, 0x1000),
            Err(HobError::BadParameters)
        );
        assert_eq!(
            RegionConfig::new(0x1000, 0x1000, 0x1000, 0),
            Err(HobError::BadParameters)
        );
    }

    #[test]
    fn free_region_must_be_inside_memory() {
        assert_eq!(
            RegionConfig::new(0x1000, 0x1000, 0x1800, 0x1000),
            Err(HobError::BadParameters)
        );
        assert_eq!(
            RegionConfig::new(0x2000, 0x1000, 0x1000, 0x1000),
            Err(HobError::BadParameters)
        );
    }

    #[test]
    fn wrapping_regions_are_rejected() {
        assert_eq!(
            RegionConfig::new(u64::MAX - 0xfff, 0x2000, u64::MAX - 0xfff, 0x100),
            Err(HobError::BadParameters)
        );
    }

    #[test]
    fn accepted_bounds() {
        let config = RegionConfig::new(0x8000_0000, 0x10_0000, 0x8008_0000, 0x8_0000).unwrap();
        assert_eq!(config.memory().address(), PhysAddress::from_raw(0x8000_0000));
        assert_eq!(config.memory().end_address(), PhysAddress::from_raw(0x8010_0000));
        assert_eq!(config.free().address(), PhysAddress::from_raw(0x8008_0000));
        assert_eq!(config.free().end_address(), PhysAddress::from_raw(0x8010_0000));
    }
}
