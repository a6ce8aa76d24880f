//! Physical addresses, lengths and extents used to describe the HOB region.

use core::fmt;

#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct PhysAddress(u64);

impl PhysAddress {
    pub const fn from_raw(val: u64) -> Self {
        Self(val)
    }

    pub const fn as_raw(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_aligned_to(self, alignment: u64) -> bool {
        self.as_raw() == align_u64_down(self.as_raw(), alignment)
    }
}

impl fmt::Debug for PhysAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhysAddress({:#x})", self.0)
    }
}

impl fmt::LowerHex for PhysAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Debug, Hash)]
pub struct Length(u64);

impl Length {
    pub const fn from_raw(val: u64) -> Length {
        Length(val)
    }

    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// A non-empty range of physical memory that does not wrap around the top of
/// the address space.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct PhysExtent {
    address: PhysAddress,
    length: Length,
}

impl PhysExtent {
    pub fn new_checked(address: PhysAddress, length: Length) -> Option<Self> {
        if length.as_raw() == 0 || length.as_raw() > u64::MAX - address.as_raw() {
            None
        } else {
            Some(Self { address, length })
        }
    }

    pub fn address(self) -> PhysAddress {
        self.address
    }

    pub fn length(self) -> Length {
        self.length
    }

    /// The first address just outside us, to the right
    pub fn end_address(self) -> PhysAddress {
        // `new_checked` guarantees this cannot overflow.
        PhysAddress::from_raw(self.address.as_raw() + self.length.as_raw())
    }

    /// Whether `other` lies completely within `self`.
    pub fn contains(self, other: Self) -> bool {
        self.address <= other.address && other.end_address() <= self.end_address()
    }
}

/// Given power-of-two `alignment`, returns the largest value below `x` aligned
/// to `alignment`
pub(crate) const fn align_u64_down(x: u64, alignment: u64) -> u64 {
    let mask = !(alignment - 1);
    x & mask
}

/// Given power-of-two `alignment`, returns the smallest value above `x` aligned
/// to `alignment`, or `None` if that is not representable.
pub(crate) const fn align_u64_up(x: u64, alignment: u64) -> Option<u64> {
    match x.checked_add(alignment - 1) {
        Some(bumped) => Some(align_u64_down(bumped, alignment)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(address: u64, length: u64) -> Option<PhysExtent> {
        PhysExtent::new_checked(PhysAddress::from_raw(address), Length::from_raw(length))
    }

    #[test]
    fn align_raw() {
        assert_eq!(align_u64_down(0, 8), 0);
        assert_eq!(align_u64_down(7, 8), 0);
        assert_eq!(align_u64_down(8, 8), 8);

        assert_eq!(align_u64_up(0, 8), Some(0));
        assert_eq!(align_u64_up(1, 8), Some(8));
        assert_eq!(align_u64_up(8, 8), Some(8));
        assert_eq!(align_u64_up(9, 8), Some(16));

        assert_eq!(align_u64_down(255, 1024), 0);
        assert_eq!(align_u64_up(255, 1024), Some(1024));

        assert_eq!(align_u64_up(u64::MAX - 3, 8), None);
    }

    #[test]
    fn address_alignment() {
        assert!(PhysAddress::from_raw(0x1000).is_aligned_to(8));
        assert!(!PhysAddress::from_raw(0x1004).is_aligned_to(8));
        assert!(!PhysAddress::from_raw(0x1007).is_aligned_to(8));
    }

    #[test]
    fn extent_rejects_empty_and_wrapping() {
        assert_eq!(extent(0x1000, 0), None);
        assert_eq!(extent(u64::MAX, 2), None);
        assert!(extent(u64::MAX - 1, 1).is_some());
    }

    #[test]
    fn extent_containment() {
        let outer = extent(0x1000, 0x1000).unwrap();

        assert_eq!(outer.end_address(), PhysAddress::from_raw(0x2000));
        assert!(outer.contains(outer));
        assert!(outer.contains(extent(0x1800, 0x800).unwrap()));
        assert!(!outer.contains(extent(0x1800, 0x801).unwrap()));
        assert!(!outer.contains(extent(0xfff, 0x10).unwrap()));
    }
}
