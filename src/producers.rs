//! Typed records built on top of [`HobList::create_hob`].

use crate::addr::{Length, PhysAddress};
use crate::error::{HobError, Result};
use crate::layout::{
    Cpu, FirmwareVolume, GenericHeader, Guid, GuidHob, HobRecord, HobType, MemoryAllocation,
    MemoryType, ResourceAttributes, ResourceDescriptor, ResourceType,
};
use crate::list::{HobList, HobRef};

/// Space reserved by [`HobList::create_guid_hob`].
#[derive(Debug)]
pub struct GuidAllocation<'a> {
    /// The new record.
    pub hob: HobRef,
    /// Exactly the requested number of bytes, starting right after the
    /// GUID. Their contents are whatever the region held before.
    pub data: &'a mut [u8],
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> HobList<B> {
    /// Describe a range of memory or I/O space. The owner GUID is left zero.
    pub fn create_resource_descriptor_hob(
        &mut self,
        resource_type: ResourceType,
        attributes: ResourceAttributes,
        physical_start: PhysAddress,
        length: Length,
    ) -> Result<HobRef> {
        self.append(|header| ResourceDescriptor {
            header,
            owner: Guid::ZERO,
            resource_type: resource_type as u32,
            resource_attribute: attributes.bits(),
            physical_start: physical_start.as_raw(),
            resource_length: length.as_raw(),
        })
    }

    /// Reserve a GUID extension record with room for `data_length` bytes of
    /// opaque data and tag it with `name`. The caller fills in the data.
    ///
    /// Fails with `BadParameters`, before allocating anything, if the record
    /// length does not fit in 16 bits.
    pub fn create_guid_hob(&mut self, name: &Guid, data_length: u16) -> Result<GuidAllocation<'_>> {
        let hob_length = data_length
            .checked_add(GuidHob::SIZE as u16)
            .ok_or_else(|| {
                log::debug!("GUID HOB {name} with {data_length} data bytes is too long");
                HobError::BadParameters
            })?;

        let hob = self.create_hob(HobType::GuidExtension, hob_length)?;

        let record = self.record_bytes_mut(&hob);
        GuidHob {
            header: GenericHeader::new(HobType::GuidExtension, hob.length()),
            name: *name,
        }
        .encode_fields(record);

        let data = &mut record[GuidHob::SIZE..GuidHob::SIZE + usize::from(data_length)];
        Ok(GuidAllocation { hob, data })
    }

    /// Like [`create_guid_hob`](Self::create_guid_hob), but copies `data`
    /// into the record.
    pub fn create_guid_hob_with_data(&mut self, name: &Guid, data: &[u8]) -> Result<HobRef> {
        let data_length = u16::try_from(data.len()).map_err(|_| HobError::BadParameters)?;
        let allocation = self.create_guid_hob(name, data_length)?;
        allocation.data.copy_from_slice(data);
        Ok(allocation.hob)
    }

    /// Describe a firmware volume.
    pub fn create_fv_hob(&mut self, base_address: PhysAddress, length: Length) -> Result<HobRef> {
        self.append(|header| FirmwareVolume {
            header,
            base_address: base_address.as_raw(),
            length: length.as_raw(),
        })
    }

    /// Record a range of memory allocated before handoff.
    pub fn create_memory_allocation_hob(
        &mut self,
        name: &Guid,
        base_address: PhysAddress,
        length: Length,
        memory_type: MemoryType,
    ) -> Result<HobRef> {
        self.append(|header| MemoryAllocation {
            header,
            name: *name,
            memory_base_address: base_address.as_raw(),
            memory_length: length.as_raw(),
            memory_type: memory_type as u32,
            reserved: [0; 4],
        })
    }

    /// Record the processor's address widths.
    pub fn create_cpu_hob(&mut self, size_of_memory_space: u8, size_of_io_space: u8) -> Result<HobRef> {
        self.append(|header| Cpu {
            header,
            size_of_memory_space,
            size_of_io_space,
            reserved: [0; 6],
        })
    }
}
