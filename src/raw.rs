//! Little-endian field access at byte offsets.
//!
//! Callers index with offsets they have already bounds-checked against the
//! region, so these panic on out-of-range offsets like slice indexing does.

pub(crate) fn read_u8(bytes: &[u8], offset: usize) -> u8 {
    bytes[offset]
}

pub(crate) fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(read_array(bytes, offset))
}

pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(read_array(bytes, offset))
}

pub(crate) fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(read_array(bytes, offset))
}

pub(crate) fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}

pub(crate) fn write_u8(bytes: &mut [u8], offset: usize, val: u8) {
    bytes[offset] = val;
}

pub(crate) fn write_u16(bytes: &mut [u8], offset: usize, val: u16) {
    write_bytes(bytes, offset, &val.to_le_bytes());
}

pub(crate) fn write_u32(bytes: &mut [u8], offset: usize, val: u32) {
    write_bytes(bytes, offset, &val.to_le_bytes());
}

pub(crate) fn write_u64(bytes: &mut [u8], offset: usize, val: u64) {
    write_bytes(bytes, offset, &val.to_le_bytes());
}

pub(crate) fn write_bytes(bytes: &mut [u8], offset: usize, val: &[u8]) {
    bytes[offset..offset + val.len()].copy_from_slice(val);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_little_endian() {
        let mut bytes = [0u8; 16];
        write_u16(&mut bytes, 0, 0xffff);
        write_u16(&mut bytes, 2, 0x0038);
        write_u32(&mut bytes, 4, 0x0102_0304);
        write_u64(&mut bytes, 8, 0x1122_3344_5566_7788);

        assert_eq!(
            bytes,
            [
                0xff, 0xff, 0x38, 0x00, 0x04, 0x03, 0x02, 0x01, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33,
                0x22, 0x11
            ]
        );

        assert_eq!(read_u16(&bytes, 2), 0x38);
        assert_eq!(read_u32(&bytes, 4), 0x0102_0304);
        assert_eq!(read_u64(&bytes, 8), 0x1122_3344_5566_7788);
        assert_eq!(read_u8(&bytes, 8), 0x88);
    }

    #[test]
    fn writes_stay_in_place() {
        let mut bytes = [0xaau8; 8];
        write_u8(&mut bytes, 3, 0);
        write_bytes(&mut bytes, 5, &[1, 2]);
        assert_eq!(bytes, [0xaa, 0xaa, 0xaa, 0, 0xaa, 1, 2, 0xaa]);
        assert_eq!(read_array::<2>(&bytes, 5), [1, 2]);
    }
}
