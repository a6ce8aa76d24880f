//! Binary layout of HOB records.
//!
//! Every type here mirrors a structure from the UEFI Platform Initialization
//! specification, volume 3. Consumers outside this crate walk the list by
//! offset, so the sizes and field offsets of these `#[repr(C)]` types are the
//! contract. Fields are stored little-endian.

use core::fmt;
use core::mem::size_of;

use memoffset::offset_of;
use num_traits::FromPrimitive;
use static_assertions::{assert_eq_size, const_assert_eq};

use crate::raw;

/// Every record starts on, and has a length that is a multiple of, this
/// many bytes.
pub const HOB_ALIGNMENT: u16 = 8;

/// Value of [`HandoffInfoTable::version`] written by this crate.
pub const HOB_HANDOFF_TABLE_VERSION: u32 = 0x000a;

/// The type tag in every record's [`GenericHeader`].
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, num_derive::FromPrimitive,
)]
#[repr(u16)]
pub enum HobType {
    Handoff = 0x0001,
    MemoryAllocation = 0x0002,
    ResourceDescriptor = 0x0003,
    GuidExtension = 0x0004,
    FirmwareVolume = 0x0005,
    Cpu = 0x0006,
    MemoryPool = 0x0007,
    FirmwareVolume2 = 0x0009,
    LoadPeimUnused = 0x000a,
    UefiCapsule = 0x000b,
    FirmwareVolume3 = 0x000c,
    Unused = 0xfffe,
    EndOfHobList = 0xffff,
}

impl HobType {
    pub fn from_raw(raw: u16) -> Option<Self> {
        Self::from_u16(raw)
    }

    pub const fn as_raw(self) -> u16 {
        self as u16
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, num_derive::FromPrimitive)]
#[repr(u32)]
pub enum BootMode {
    FullConfiguration = 0x00,
    MinimalConfiguration = 0x01,
    AssumingNoConfigurationChanges = 0x02,
    FullConfigurationPlusDiagnostics = 0x03,
    DefaultSettings = 0x04,
    S4Resume = 0x05,
    S5Resume = 0x06,
    MfgModeSettings = 0x07,
    S2Resume = 0x10,
    S3Resume = 0x11,
    FlashUpdate = 0x12,
    InRecoveryMode = 0x20,
}

/// The kind of resource a [`ResourceDescriptor`] describes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, num_derive::FromPrimitive)]
#[repr(u32)]
pub enum ResourceType {
    SystemMemory = 0x00,
    MemoryMappedIo = 0x01,
    Io = 0x02,
    FirmwareDevice = 0x03,
    MemoryMappedIoPort = 0x04,
    MemoryReserved = 0x05,
    IoReserved = 0x06,
    MemoryUnaccepted = 0x07,
}

bitflags::bitflags! {
    /// Attributes of a described resource. Unknown bits read back from a list
    /// are retained.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct ResourceAttributes: u32 {
        const PRESENT = 0x0000_0001;
        const INITIALIZED = 0x0000_0002;
        const TESTED = 0x0000_0004;
        const SINGLE_BIT_ECC = 0x0000_0008;
        const MULTIPLE_BIT_ECC = 0x0000_0010;
        const ECC_RESERVED_1 = 0x0000_0020;
        const ECC_RESERVED_2 = 0x0000_0040;
        const READ_PROTECTED = 0x0000_0080;
        const WRITE_PROTECTED = 0x0000_0100;
        const EXECUTION_PROTECTED = 0x0000_0200;
        const UNCACHEABLE = 0x0000_0400;
        const WRITE_COMBINEABLE = 0x0000_0800;
        const WRITE_THROUGH_CACHEABLE = 0x0000_1000;
        const WRITE_BACK_CACHEABLE = 0x0000_2000;
        const IO_16_BIT = 0x0000_4000;
        const IO_32_BIT = 0x0000_8000;
        const IO_64_BIT = 0x0001_0000;
        const UNCACHED_EXPORTED = 0x0002_0000;
        const READ_ONLY_PROTECTED = 0x0004_0000;
        const READ_ONLY_PROTECTABLE = 0x0008_0000;
        const READ_PROTECTABLE = 0x0010_0000;
        const WRITE_PROTECTABLE = 0x0020_0000;
        const EXECUTION_PROTECTABLE = 0x0040_0000;
        const PERSISTENT = 0x0080_0000;
        const PERSISTABLE = 0x0100_0000;
        const MORE_RELIABLE = 0x0200_0000;
    }
}

/// UEFI memory types, as used by [`MemoryAllocation`] records.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, num_derive::FromPrimitive)]
#[repr(u32)]
pub enum MemoryType {
    Reserved = 0,
    LoaderCode = 1,
    LoaderData = 2,
    BootServicesCode = 3,
    BootServicesData = 4,
    RuntimeServicesCode = 5,
    RuntimeServicesData = 6,
    Conventional = 7,
    Unusable = 8,
    AcpiReclaim = 9,
    AcpiNvs = 10,
    MemoryMappedIo = 11,
    MemoryMappedIoPortSpace = 12,
    PalCode = 13,
    Persistent = 14,
    Unaccepted = 15,
}

/// A 128-bit identifier, stored in its on-disk (mixed-endian) byte order.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Guid([u8; 16]);

impl Guid {
    pub const ZERO: Guid = Guid([0; 16]);

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds a GUID from its textual groups, e.g.
    /// `7739f24c-93d7-11d4-9a3a-0090273fc14d` is
    /// `from_fields(0x7739f24c, 0x93d7, 0x11d4, [0x9a, 0x3a, 0x00, 0x90, 0x27, 0x3f, 0xc1, 0x4d])`.
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        let d1 = data1.to_le_bytes();
        let d2 = data2.to_le_bytes();
        let d3 = data3.to_le_bytes();
        Self([
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], data4[0], data4[1], data4[2],
            data4[3], data4[4], data4[5], data4[6], data4[7],
        ])
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-",
            u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            u16::from_le_bytes([b[4], b[5]]),
            u16::from_le_bytes([b[6], b[7]]),
            b[8],
            b[9]
        )?;
        b[10..].iter().try_for_each(|x| write!(f, "{x:02x}"))
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}

/// A fixed-layout record type that can be appended to and decoded from a
/// HOB list.
pub trait HobRecord: Sized {
    const HOB_TYPE: HobType;

    /// Size of the record including its generic header.
    const SIZE: usize = size_of::<Self>();

    /// Decode from `bytes`, which starts at the record's header and is at
    /// least `SIZE` long.
    fn decode(bytes: &[u8]) -> Self;

    /// Write every field after the generic header into `bytes`, which starts
    /// at the record's header and is at least `SIZE` long. The header is
    /// owned by the list.
    fn encode_fields(&self, bytes: &mut [u8]);
}

/// The `(type, length, reserved)` triple at the start of every record.
/// `hob_length` covers the whole record, header included.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GenericHeader {
    pub hob_type: u16,
    pub hob_length: u16,
    pub reserved: u32,
}

assert_eq_size!(GenericHeader, [u8; 8]);

impl GenericHeader {
    pub const SIZE: usize = size_of::<Self>();

    pub const fn new(hob_type: HobType, hob_length: u16) -> Self {
        Self {
            hob_type: hob_type.as_raw(),
            hob_length,
            reserved: 0,
        }
    }

    pub const fn end_of_list() -> Self {
        Self::new(HobType::EndOfHobList, Self::SIZE as u16)
    }

    pub fn hob_type(&self) -> Option<HobType> {
        HobType::from_raw(self.hob_type)
    }

    pub fn is_end_of_list(&self) -> bool {
        self.hob_type == HobType::EndOfHobList.as_raw()
    }

    pub fn decode(bytes: &[u8]) -> Self {
        Self {
            hob_type: raw::read_u16(bytes, offset_of!(GenericHeader, hob_type)),
            hob_length: raw::read_u16(bytes, offset_of!(GenericHeader, hob_length)),
            reserved: raw::read_u32(bytes, offset_of!(GenericHeader, reserved)),
        }
    }

    pub fn encode(&self, bytes: &mut [u8]) {
        raw::write_u16(bytes, offset_of!(GenericHeader, hob_type), self.hob_type);
        raw::write_u16(bytes, offset_of!(GenericHeader, hob_length), self.hob_length);
        raw::write_u32(bytes, offset_of!(GenericHeader, reserved), self.reserved);
    }
}

/// The first record of every list. Describes the region the list lives in
/// and where the next record goes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HandoffInfoTable {
    pub header: GenericHeader,
    pub version: u32,
    pub boot_mode: u32,
    pub memory_top: u64,
    pub memory_bottom: u64,
    pub free_memory_top: u64,
    pub free_memory_bottom: u64,
    pub end_of_hob_list: u64,
}

assert_eq_size!(HandoffInfoTable, [u8; 56]);

impl HandoffInfoTable {
    pub fn boot_mode(&self) -> Option<BootMode> {
        BootMode::from_u32(self.boot_mode)
    }

    /// Rewrite only the two fields that move on every append.
    pub(crate) fn encode_cursor(bytes: &mut [u8], free_memory_bottom: u64, end_of_hob_list: u64) {
        raw::write_u64(
            bytes,
            offset_of!(HandoffInfoTable, free_memory_bottom),
            free_memory_bottom,
        );
        raw::write_u64(
            bytes,
            offset_of!(HandoffInfoTable, end_of_hob_list),
            end_of_hob_list,
        );
    }
}

impl HobRecord for HandoffInfoTable {
    const HOB_TYPE: HobType = HobType::Handoff;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            header: GenericHeader::decode(bytes),
            version: raw::read_u32(bytes, offset_of!(HandoffInfoTable, version)),
            boot_mode: raw::read_u32(bytes, offset_of!(HandoffInfoTable, boot_mode)),
            memory_top: raw::read_u64(bytes, offset_of!(HandoffInfoTable, memory_top)),
            memory_bottom: raw::read_u64(bytes, offset_of!(HandoffInfoTable, memory_bottom)),
            free_memory_top: raw::read_u64(bytes, offset_of!(HandoffInfoTable, free_memory_top)),
            free_memory_bottom: raw::read_u64(
                bytes,
                offset_of!(HandoffInfoTable, free_memory_bottom),
            ),
            end_of_hob_list: raw::read_u64(bytes, offset_of!(HandoffInfoTable, end_of_hob_list)),
        }
    }

    fn encode_fields(&self, bytes: &mut [u8]) {
        raw::write_u32(bytes, offset_of!(HandoffInfoTable, version), self.version);
        raw::write_u32(bytes, offset_of!(HandoffInfoTable, boot_mode), self.boot_mode);
        raw::write_u64(bytes, offset_of!(HandoffInfoTable, memory_top), self.memory_top);
        raw::write_u64(
            bytes,
            offset_of!(HandoffInfoTable, memory_bottom),
            self.memory_bottom,
        );
        raw::write_u64(
            bytes,
            offset_of!(HandoffInfoTable, free_memory_top),
            self.free_memory_top,
        );
        Self::encode_cursor(bytes, self.free_memory_bottom, self.end_of_hob_list);
    }
}

/// Describes a range of memory or I/O space and its attributes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ResourceDescriptor {
    pub header: GenericHeader,
    pub owner: Guid,
    pub resource_type: u32,
    pub resource_attribute: u32,
    pub physical_start: u64,
    pub resource_length: u64,
}

assert_eq_size!(ResourceDescriptor, [u8; 48]);

impl ResourceDescriptor {
    pub fn resource_type(&self) -> Option<ResourceType> {
        ResourceType::from_u32(self.resource_type)
    }

    pub fn attributes(&self) -> ResourceAttributes {
        ResourceAttributes::from_bits_retain(self.resource_attribute)
    }
}

impl HobRecord for ResourceDescriptor {
    const HOB_TYPE: HobType = HobType::ResourceDescriptor;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            header: GenericHeader::decode(bytes),
            owner: Guid(raw::read_array(bytes, offset_of!(ResourceDescriptor, owner))),
            resource_type: raw::read_u32(bytes, offset_of!(ResourceDescriptor, resource_type)),
            resource_attribute: raw::read_u32(
                bytes,
                offset_of!(ResourceDescriptor, resource_attribute),
            ),
            physical_start: raw::read_u64(bytes, offset_of!(ResourceDescriptor, physical_start)),
            resource_length: raw::read_u64(
                bytes,
                offset_of!(ResourceDescriptor, resource_length),
            ),
        }
    }

    fn encode_fields(&self, bytes: &mut [u8]) {
        raw::write_bytes(
            bytes,
            offset_of!(ResourceDescriptor, owner),
            self.owner.as_bytes(),
        );
        raw::write_u32(
            bytes,
            offset_of!(ResourceDescriptor, resource_type),
            self.resource_type,
        );
        raw::write_u32(
            bytes,
            offset_of!(ResourceDescriptor, resource_attribute),
            self.resource_attribute,
        );
        raw::write_u64(
            bytes,
            offset_of!(ResourceDescriptor, physical_start),
            self.physical_start,
        );
        raw::write_u64(
            bytes,
            offset_of!(ResourceDescriptor, resource_length),
            self.resource_length,
        );
    }
}

/// Header of a GUID extension record. `header.hob_length - SIZE` bytes of
/// opaque data follow it.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GuidHob {
    pub header: GenericHeader,
    pub name: Guid,
}

assert_eq_size!(GuidHob, [u8; 24]);

impl HobRecord for GuidHob {
    const HOB_TYPE: HobType = HobType::GuidExtension;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            header: GenericHeader::decode(bytes),
            name: Guid(raw::read_array(bytes, offset_of!(GuidHob, name))),
        }
    }

    fn encode_fields(&self, bytes: &mut [u8]) {
        raw::write_bytes(bytes, offset_of!(GuidHob, name), self.name.as_bytes());
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FirmwareVolume {
    pub header: GenericHeader,
    pub base_address: u64,
    pub length: u64,
}

assert_eq_size!(FirmwareVolume, [u8; 24]);

impl HobRecord for FirmwareVolume {
    const HOB_TYPE: HobType = HobType::FirmwareVolume;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            header: GenericHeader::decode(bytes),
            base_address: raw::read_u64(bytes, offset_of!(FirmwareVolume, base_address)),
            length: raw::read_u64(bytes, offset_of!(FirmwareVolume, length)),
        }
    }

    fn encode_fields(&self, bytes: &mut [u8]) {
        raw::write_u64(
            bytes,
            offset_of!(FirmwareVolume, base_address),
            self.base_address,
        );
        raw::write_u64(bytes, offset_of!(FirmwareVolume, length), self.length);
    }
}

/// Widths, in address bits, of the processor's memory and I/O spaces.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cpu {
    pub header: GenericHeader,
    pub size_of_memory_space: u8,
    pub size_of_io_space: u8,
    pub reserved: [u8; 6],
}

assert_eq_size!(Cpu, [u8; 16]);

impl HobRecord for Cpu {
    const HOB_TYPE: HobType = HobType::Cpu;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            header: GenericHeader::decode(bytes),
            size_of_memory_space: raw::read_u8(bytes, offset_of!(Cpu, size_of_memory_space)),
            size_of_io_space: raw::read_u8(bytes, offset_of!(Cpu, size_of_io_space)),
            reserved: raw::read_array(bytes, offset_of!(Cpu, reserved)),
        }
    }

    fn encode_fields(&self, bytes: &mut [u8]) {
        raw::write_u8(
            bytes,
            offset_of!(Cpu, size_of_memory_space),
            self.size_of_memory_space,
        );
        raw::write_u8(bytes, offset_of!(Cpu, size_of_io_space), self.size_of_io_space);
        raw::write_bytes(bytes, offset_of!(Cpu, reserved), &self.reserved);
    }
}

/// A range of memory that was allocated before the list was handed off.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MemoryAllocation {
    pub header: GenericHeader,
    pub name: Guid,
    pub memory_base_address: u64,
    pub memory_length: u64,
    pub memory_type: u32,
    pub reserved: [u8; 4],
}

assert_eq_size!(MemoryAllocation, [u8; 48]);

impl MemoryAllocation {
    pub fn memory_type(&self) -> Option<MemoryType> {
        MemoryType::from_u32(self.memory_type)
    }
}

impl HobRecord for MemoryAllocation {
    const HOB_TYPE: HobType = HobType::MemoryAllocation;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            header: GenericHeader::decode(bytes),
            name: Guid(raw::read_array(bytes, offset_of!(MemoryAllocation, name))),
            memory_base_address: raw::read_u64(
                bytes,
                offset_of!(MemoryAllocation, memory_base_address),
            ),
            memory_length: raw::read_u64(bytes, offset_of!(MemoryAllocation, memory_length)),
            memory_type: raw::read_u32(bytes, offset_of!(MemoryAllocation, memory_type)),
            reserved: raw::read_array(bytes, offset_of!(MemoryAllocation, reserved)),
        }
    }

    fn encode_fields(&self, bytes: &mut [u8]) {
        raw::write_bytes(bytes, offset_of!(MemoryAllocation, name), self.name.as_bytes());
        raw::write_u64(
            bytes,
            offset_of!(MemoryAllocation, memory_base_address),
            self.memory_base_address,
        );
        raw::write_u64(
            bytes,
            offset_of!(MemoryAllocation, memory_length),
            self.memory_length,
        );
        raw::write_u32(
            bytes,
            offset_of!(MemoryAllocation, memory_type),
            self.memory_type,
        );
        raw::write_bytes(bytes, offset_of!(MemoryAllocation, reserved), &self.reserved);
    }
}

// Fixed-size records must keep the list aligned without padding.
const_assert_eq!(HandoffInfoTable::SIZE % HOB_ALIGNMENT as usize, 0);
const_assert_eq!(ResourceDescriptor::SIZE % HOB_ALIGNMENT as usize, 0);
const_assert_eq!(GuidHob::SIZE % HOB_ALIGNMENT as usize, 0);
const_assert_eq!(FirmwareVolume::SIZE % HOB_ALIGNMENT as usize, 0);
const_assert_eq!(Cpu::SIZE % HOB_ALIGNMENT as usize, 0);
const_assert_eq!(MemoryAllocation::SIZE % HOB_ALIGNMENT as usize, 0);

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn field_offsets_match_pi_layout() {
        assert_eq!(offset_of!(GenericHeader, hob_length), 2);
        assert_eq!(offset_of!(GenericHeader, reserved), 4);

        assert_eq!(offset_of!(HandoffInfoTable, version), 8);
        assert_eq!(offset_of!(HandoffInfoTable, boot_mode), 12);
        assert_eq!(offset_of!(HandoffInfoTable, memory_top), 16);
        assert_eq!(offset_of!(HandoffInfoTable, memory_bottom), 24);
        assert_eq!(offset_of!(HandoffInfoTable, free_memory_top), 32);
        assert_eq!(offset_of!(HandoffInfoTable, free_memory_bottom), 40);
        assert_eq!(offset_of!(HandoffInfoTable, end_of_hob_list), 48);

        assert_eq!(offset_of!(ResourceDescriptor, owner), 8);
        assert_eq!(offset_of!(ResourceDescriptor, resource_type), 24);
        assert_eq!(offset_of!(ResourceDescriptor, resource_attribute), 28);
        assert_eq!(offset_of!(ResourceDescriptor, physical_start), 32);
        assert_eq!(offset_of!(ResourceDescriptor, resource_length), 40);

        assert_eq!(offset_of!(GuidHob, name), 8);

        assert_eq!(offset_of!(FirmwareVolume, base_address), 8);
        assert_eq!(offset_of!(FirmwareVolume, length), 16);

        assert_eq!(offset_of!(Cpu, size_of_memory_space), 8);
        assert_eq!(offset_of!(Cpu, size_of_io_space), 9);
        assert_eq!(offset_of!(Cpu, reserved), 10);

        assert_eq!(offset_of!(MemoryAllocation, name), 8);
        assert_eq!(offset_of!(MemoryAllocation, memory_base_address), 24);
        assert_eq!(offset_of!(MemoryAllocation, memory_length), 32);
        assert_eq!(offset_of!(MemoryAllocation, memory_type), 40);
        assert_eq!(offset_of!(MemoryAllocation, reserved), 44);
    }

    #[test]
    fn terminator_header_bytes() {
        let mut bytes = [0x5au8; 8];
        GenericHeader::end_of_list().encode(&mut bytes);
        assert_eq!(bytes, [0xff, 0xff, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert!(GenericHeader::decode(&bytes).is_end_of_list());
    }

    #[test]
    fn hob_type_tags() {
        assert_eq!(HobType::from_raw(0x0003), Some(HobType::ResourceDescriptor));
        assert_eq!(HobType::from_raw(0xffff), Some(HobType::EndOfHobList));
        assert_eq!(HobType::from_raw(0x0008), None);
        assert_eq!(HobType::GuidExtension.as_raw(), 0x0004);
    }

    #[test]
    fn guid_text_form() {
        let guid = Guid::from_fields(
            0x7739f24c,
            0x93d7,
            0x11d4,
            [0x9a, 0x3a, 0x00, 0x90, 0x27, 0x3f, 0xc1, 0x4d],
        );
        assert_eq!(
            guid.as_bytes(),
            &[
                0x4c, 0xf2, 0x39, 0x77, 0xd7, 0x93, 0xd4, 0x11, 0x9a, 0x3a, 0x00, 0x90, 0x27,
                0x3f, 0xc1, 0x4d
            ]
        );
        assert_eq!(
            format!("{guid}"),
            "7739f24c-93d7-11d4-9a3a-0090273fc14d"
        );
    }

    #[test]
    fn resource_descriptor_fields_survive_encoding() {
        let descriptor = ResourceDescriptor {
            header: GenericHeader::new(HobType::ResourceDescriptor, 48),
            owner: Guid::ZERO,
            resource_type: ResourceType::MemoryMappedIo as u32,
            resource_attribute: (ResourceAttributes::PRESENT | ResourceAttributes::UNCACHEABLE)
                .bits(),
            physical_start: 0x0900_0000,
            resource_length: 0x1000,
        };

        let mut bytes = [0u8; ResourceDescriptor::SIZE];
        descriptor.header.encode(&mut bytes);
        descriptor.encode_fields(&mut bytes);

        let decoded = ResourceDescriptor::decode(&bytes);
        assert_eq!(decoded, descriptor);
        assert_eq!(decoded.resource_type(), Some(ResourceType::MemoryMappedIo));
        assert_eq!(
            decoded.attributes(),
            ResourceAttributes::PRESENT | ResourceAttributes::UNCACHEABLE
        );
    }

    #[test]
    fn unknown_attribute_bits_are_retained() {
        let descriptor = ResourceDescriptor {
            header: GenericHeader::new(HobType::ResourceDescriptor, 48),
            owner: Guid::ZERO,
            resource_type: 0x42,
            resource_attribute: 0x8000_0001,
            physical_start: 0,
            resource_length: 0,
        };
        assert_eq!(descriptor.resource_type(), None);
        assert_eq!(descriptor.attributes().bits(), 0x8000_0001);
        assert!(descriptor.attributes().contains(ResourceAttributes::PRESENT));
    }
}
