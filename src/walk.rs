//! Reading a HOB list back, the way a consumer does: start at the handoff
//! table and step forward by each record's length until the end-of-list
//! record.

use crate::layout::{
    Cpu, FirmwareVolume, GenericHeader, Guid, GuidHob, HandoffInfoTable, HobRecord, HobType,
    MemoryAllocation, ResourceDescriptor,
};

/// One decoded record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Hob<'a> {
    Handoff(HandoffInfoTable),
    MemoryAllocation(MemoryAllocation),
    ResourceDescriptor(ResourceDescriptor),
    /// `data` runs to the end of the record, so it includes any alignment
    /// padding after the bytes the producer asked for.
    GuidExtension {
        name: Guid,
        data: &'a [u8],
    },
    FirmwareVolume(FirmwareVolume),
    Cpu(Cpu),
    /// Any record type not decoded above, or a known type too short for its
    /// layout. `bytes` is everything after the generic header.
    Other {
        hob_type: u16,
        bytes: &'a [u8],
    },
}

impl<'a> Hob<'a> {
    /// `record` spans exactly the record described by `header`.
    fn decode(header: GenericHeader, record: &'a [u8]) -> Self {
        fn fits<R: HobRecord>(record: &[u8]) -> bool {
            record.len() >= R::SIZE
        }

        match header.hob_type() {
            Some(HobType::Handoff) if fits::<HandoffInfoTable>(record) => {
                Hob::Handoff(HandoffInfoTable::decode(record))
            }
            Some(HobType::MemoryAllocation) if fits::<MemoryAllocation>(record) => {
                Hob::MemoryAllocation(MemoryAllocation::decode(record))
            }
            Some(HobType::ResourceDescriptor) if fits::<ResourceDescriptor>(record) => {
                Hob::ResourceDescriptor(ResourceDescriptor::decode(record))
            }
            Some(HobType::GuidExtension) if fits::<GuidHob>(record) => Hob::GuidExtension {
                name: GuidHob::decode(record).name,
                data: &record[GuidHob::SIZE..],
            },
            Some(HobType::FirmwareVolume) if fits::<FirmwareVolume>(record) => {
                Hob::FirmwareVolume(FirmwareVolume::decode(record))
            }
            Some(HobType::Cpu) if fits::<Cpu>(record) => Hob::Cpu(Cpu::decode(record)),
            _ => Hob::Other {
                hob_type: header.hob_type,
                bytes: &record[GenericHeader::SIZE..],
            },
        }
    }
}

/// Iterates over the records of a list, handoff table included. The
/// end-of-list record is not yielded.
///
/// Iteration stops early, without reading past `bytes`, on a header whose
/// length is shorter than a header, not a multiple of 8, or runs past the
/// end of `bytes`. [`reached_end`](Self::reached_end) tells the two apart.
#[derive(Clone, Debug)]
pub struct HobIter<'a> {
    bytes: &'a [u8],
    offset: usize,
    done: bool,
    reached_end: bool,
}

impl<'a> HobIter<'a> {
    /// `bytes` starts at the handoff table.
    pub fn new(bytes: &'a [u8]) -> Self {
        HobIter {
            bytes,
            offset: 0,
            done: false,
            reached_end: false,
        }
    }

    /// Whether the walk has stopped at an end-of-list record.
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    /// Data of the first GUID extension record named `name`.
    pub fn find_guid(self, name: &Guid) -> Option<&'a [u8]> {
        self.filter_map(|hob| match hob {
            Hob::GuidExtension { name: n, data } if n == *name => Some(data),
            _ => None,
        })
        .next()
    }

    fn stop(&mut self) -> Option<Hob<'a>> {
        self.done = true;
        None
    }
}

impl<'a> Iterator for HobIter<'a> {
    type Item = Hob<'a>;

    fn next(&mut self) -> Option<Hob<'a>> {
        if self.done {
            return None;
        }

        let rest = match self.bytes.get(self.offset..) {
            Some(rest) if rest.len() >= GenericHeader::SIZE => rest,
            _ => {
                log::debug!("HOB list at offset {:#x} ends without terminator", self.offset);
                return self.stop();
            }
        };

        let header = GenericHeader::decode(rest);
        if header.is_end_of_list() {
            self.reached_end = true;
            return self.stop();
        }

        let length = usize::from(header.hob_length);
        if length < GenericHeader::SIZE || length % GenericHeader::SIZE != 0 || length > rest.len()
        {
            log::debug!(
                "malformed HOB at offset {:#x}: type {:#06x}, length {}",
                self.offset,
                header.hob_type,
                length
            );
            return self.stop();
        }

        self.offset += length;
        Some(Hob::decode(header, &rest[..length]))
    }
}
