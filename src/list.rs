//! The HOB list itself: the handoff table, the end-of-list record, and the
//! append primitive every producer goes through.

use core::fmt;

use crate::addr::{align_u64_up, Length, PhysAddress};
use crate::config::RegionConfig;
use crate::error::{HobError, Result};
use crate::layout::{
    BootMode, GenericHeader, HandoffInfoTable, HobRecord, HobType, HOB_ALIGNMENT,
    HOB_HANDOFF_TABLE_VERSION,
};
use crate::walk::HobIter;

/// A HOB list under construction.
///
/// `buffer` backs the free part of the region: byte 0 is at the free base
/// address, where the handoff table lives. All bookkeeping is kept as
/// offsets into `buffer` and mirrored into the handoff table's address
/// fields after every change, so the bytes are a valid list at all times.
///
/// Records are only ever appended. Used space grows monotonically and
/// nothing is reclaimed.
pub struct HobList<B> {
    buffer: B,
    config: RegionConfig,
    // Offset just past the free region. Fixed at creation.
    free_top: usize,
    // Offset just past the end-of-list record.
    free_bottom: usize,
    // Offset of the end-of-list record, where the next record goes.
    end_of_list: usize,
}

/// A record that was appended to a [`HobList`]. Locates the record by its
/// offset from the handoff table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HobRef {
    hob_type: HobType,
    offset: usize,
    address: PhysAddress,
    length: u16,
}

impl HobRef {
    pub fn hob_type(&self) -> HobType {
        self.hob_type
    }

    /// Offset of the record's header from the start of the list.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Physical address of the record's header.
    pub fn address(&self) -> PhysAddress {
        self.address
    }

    /// Length of the whole record, header included, after alignment.
    pub fn length(&self) -> u16 {
        self.length
    }

    fn range(&self) -> core::ops::Range<usize> {
        self.offset..self.offset + usize::from(self.length)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> HobList<B> {
    /// Start a list in `buffer`, which backs `config.free()`.
    ///
    /// Writes the handoff table at the start of the free region followed by
    /// the end-of-list record. Fails with `BadParameters`, writing nothing,
    /// if `buffer` is shorter than the free region or the free region cannot
    /// hold those two records.
    pub fn create(buffer: B, config: RegionConfig) -> Result<Self> {
        let free_top = usize::try_from(config.free().length().as_raw())
            .map_err(|_| HobError::BadParameters)?;
        if buffer.as_ref().len() < free_top {
            return Err(HobError::BadParameters);
        }

        let end_of_list = HandoffInfoTable::SIZE;
        let free_bottom = end_of_list + GenericHeader::SIZE;
        if free_bottom > free_top {
            return Err(HobError::BadParameters);
        }

        if !config
            .free()
            .address()
            .is_aligned_to(u64::from(HOB_ALIGNMENT))
        {
            log::warn!(
                "HOB list base {:#x} is not {}-byte aligned",
                config.free().address(),
                HOB_ALIGNMENT
            );
        }

        let mut list = HobList {
            buffer,
            config,
            free_top,
            free_bottom,
            end_of_list,
        };

        let table = HandoffInfoTable {
            header: GenericHeader::new(HobType::Handoff, HandoffInfoTable::SIZE as u16),
            version: HOB_HANDOFF_TABLE_VERSION,
            boot_mode: BootMode::FullConfiguration as u32,
            memory_top: config.memory().end_address().as_raw(),
            memory_bottom: config.memory().address().as_raw(),
            free_memory_top: config.free().end_address().as_raw(),
            free_memory_bottom: list.address_of(free_bottom).as_raw(),
            end_of_hob_list: list.address_of(end_of_list).as_raw(),
        };

        let bytes = list.buffer.as_mut();
        table.header.encode(bytes);
        table.encode_fields(bytes);
        GenericHeader::end_of_list().encode(&mut bytes[end_of_list..]);

        log::debug!(
            "created HOB list at {:#x}, free memory {:#x}..{:#x}",
            list.table_address(),
            list.free_bottom(),
            list.free_top()
        );

        Ok(list)
    }

    /// Append a record of `length` bytes, header included, with type
    /// `hob_type`.
    ///
    /// `length` is rounded up to a multiple of 8. The new record takes the
    /// place of the end-of-list record and a fresh end-of-list record is
    /// written right after it. Only the header is written; the caller fills
    /// in the rest through [`payload_mut`](Self::payload_mut).
    ///
    /// Fails with `OutOfMemory`, leaving the list untouched, if the rounded
    /// length is zero or larger than the remaining free space.
    pub fn create_hob(&mut self, hob_type: HobType, length: u16) -> Result<HobRef> {
        let hob_length = align_hob_length(length);
        if hob_length == 0 {
            log::warn!("refusing zero-length {hob_type:?} HOB (requested {length} bytes)");
            return Err(HobError::OutOfMemory);
        }

        let free = self.free_top - self.free_bottom;
        if usize::from(hob_length) > free {
            log::warn!(
                "no room for {hob_type:?} HOB of {hob_length} bytes, {free} bytes free"
            );
            return Err(HobError::OutOfMemory);
        }

        // Everything below fits: the new end-of-list record ends at
        // `free_bottom + hob_length <= free_top`.
        let offset = self.end_of_list;
        let end_of_list = offset + usize::from(hob_length);
        let free_bottom = end_of_list + GenericHeader::SIZE;
        let hob = HobRef {
            hob_type,
            offset,
            address: self.address_of(offset),
            length: hob_length,
        };
        let end_of_list_address = self.address_of(end_of_list);
        let free_bottom_address = self.address_of(free_bottom);

        let bytes = self.buffer.as_mut();
        GenericHeader::new(hob_type, hob_length).encode(&mut bytes[offset..]);
        GenericHeader::end_of_list().encode(&mut bytes[end_of_list..]);
        HandoffInfoTable::encode_cursor(
            bytes,
            free_bottom_address.as_raw(),
            end_of_list_address.as_raw(),
        );

        self.end_of_list = end_of_list;
        self.free_bottom = free_bottom;

        log::trace!(
            "appended {:?} HOB of {} bytes at {:#x}",
            hob_type,
            hob_length,
            hob.address
        );

        Ok(hob)
    }

    /// Append a fixed-layout record. `build` receives the header that was
    /// written for it and supplies the remaining fields.
    pub(crate) fn append<R: HobRecord>(
        &mut self,
        build: impl FnOnce(GenericHeader) -> R,
    ) -> Result<HobRef> {
        // Fixed records are a few dozen bytes, far below `u16::MAX`.
        let hob = self.create_hob(R::HOB_TYPE, R::SIZE as u16)?;
        let record = build(GenericHeader::new(hob.hob_type, hob.length));
        record.encode_fields(self.record_bytes_mut(&hob));
        Ok(hob)
    }

    pub(crate) fn record_bytes_mut(&mut self, hob: &HobRef) -> &mut [u8] {
        &mut self.buffer.as_mut()[hob.range()]
    }

    /// The bytes of `hob` after its generic header, or `None` if `hob` is not
    /// a record of this list.
    ///
    /// A `HobRef` is only meaningful for the list that issued it. One from
    /// another list is refused unless it names the same address and finds a
    /// matching header there.
    pub fn payload_mut(&mut self, hob: &HobRef) -> Option<&mut [u8]> {
        if hob.offset < HandoffInfoTable::SIZE
            || hob.range().end > self.end_of_list
            || hob.address != self.address_of(hob.offset)
        {
            return None;
        }
        let header = GenericHeader::decode(&self.buffer.as_ref()[hob.offset..]);
        if header != GenericHeader::new(hob.hob_type, hob.length) {
            return None;
        }
        self.buffer
            .as_mut()
            .get_mut(hob.offset + GenericHeader::SIZE..hob.range().end)
    }

    /// Decode the handoff table from the list's bytes.
    pub fn handoff_table(&self) -> HandoffInfoTable {
        HandoffInfoTable::decode(self.buffer.as_ref())
    }

    /// The list as the consumer will see it: the handoff table through the
    /// end-of-list record.
    pub fn used_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.free_bottom]
    }

    /// Walk every record, starting with the handoff table.
    pub fn iter(&self) -> HobIter<'_> {
        HobIter::new(self.used_bytes())
    }
}

impl<B> HobList<B> {
    pub fn config(&self) -> RegionConfig {
        self.config
    }

    /// Address of the handoff table, which is also the free region's base.
    pub fn table_address(&self) -> PhysAddress {
        self.config.free().address()
    }

    pub fn memory_top(&self) -> PhysAddress {
        self.config.memory().end_address()
    }

    pub fn memory_bottom(&self) -> PhysAddress {
        self.config.memory().address()
    }

    pub fn free_top(&self) -> PhysAddress {
        self.address_of(self.free_top)
    }

    /// First address past the end-of-list record.
    pub fn free_bottom(&self) -> PhysAddress {
        self.address_of(self.free_bottom)
    }

    /// Address of the end-of-list record.
    pub fn end_of_list(&self) -> PhysAddress {
        self.address_of(self.end_of_list)
    }

    /// Space left for records.
    pub fn free_memory(&self) -> Length {
        Length::from_raw((self.free_top - self.free_bottom) as u64)
    }

    /// Give up the backing buffer. The list in it stays valid.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn address_of(&self, offset: usize) -> PhysAddress {
        // Offsets never exceed the free region's length, and the free region
        // does not wrap.
        PhysAddress::from_raw(self.table_address().as_raw() + offset as u64)
    }
}

#[cfg(feature = "alloc")]
impl HobList<alloc::vec::Vec<u8>> {
    /// Start a list in a zeroed heap buffer sized to the free region.
    pub fn create_owned(config: RegionConfig) -> Result<Self> {
        let len = usize::try_from(config.free().length().as_raw())
            .map_err(|_| HobError::BadParameters)?;
        let mut buffer = alloc::vec::Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| HobError::OutOfMemory)?;
        buffer.resize(len, 0);
        Self::create(buffer, config)
    }
}

impl<B> fmt::Debug for HobList<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HobList")
            .field("table", &self.table_address())
            .field("end_of_list", &self.end_of_list())
            .field("free_bottom", &self.free_bottom())
            .field("free_top", &self.free_top())
            .finish()
    }
}

/// Round `length` up to the record alignment. A length that does not fit in
/// `u16` once rounded comes out as 0.
fn align_hob_length(length: u16) -> u16 {
    align_u64_up(u64::from(length), u64::from(HOB_ALIGNMENT))
        .and_then(|aligned| u16::try_from(aligned).ok())
        .unwrap_or(0)
}


#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;

    const BASE: u64 = 0x4000_0000;

    proptest! {
        #[test]
        fn appends_keep_list_consistent(
            region_size in 64usize..2048,
            lengths in proptest::collection::vec(0u16..600, 0..40),
        ) {
            let mut region = vec![0u8; region_size];
            let config = RegionConfig::new(BASE, region_size as u64, BASE, region_size as u64).unwrap();
            let mut list = HobList::create(&mut region[..], config).unwrap();

            let mut appended = 0;
            for length in lengths {
                let free_bottom = list.free_bottom();
                let end_of_list = list.end_of_list();
                let snapshot = list.used_bytes().to_vec();

                match list.create_hob(HobType::Unused, length) {
                    Ok(hob) => {
                        appended += 1;
                        let rounded = u64::from(hob.length());
                        prop_assert_eq!(rounded % 8, 0);
                        prop_assert!(rounded >= u64::from(length));
                        prop_assert_eq!(hob.address(), end_of_list);
                        prop_assert_eq!(
                            list.free_bottom().as_raw() - free_bottom.as_raw(),
                            rounded
                        );
                        prop_assert_eq!(
                            list.end_of_list().as_raw(),
                            hob.address().as_raw() + rounded
                        );
                    }
                    Err(e) => {
                        prop_assert_eq!(e, HobError::OutOfMemory);
                        let rounded = align_hob_length(length);
                        prop_assert!(rounded == 0 || u64::from(rounded) > list.free_memory().as_raw());
                        prop_assert_eq!(list.free_bottom(), free_bottom);
                        prop_assert_eq!(list.end_of_list(), end_of_list);
                        prop_assert_eq!(list.used_bytes(), &snapshot[..]);
                    }
                }

                prop_assert!(list.free_bottom() <= list.free_top());
            }

            // The walk visits the table plus every appended record, ends at
            // the terminator, and stays inside the used bytes.
            let mut iter = list.iter();
            prop_assert_eq!(iter.by_ref().count(), appended + 1);
            prop_assert!(iter.reached_end());
        }
    }
}
