use std::mem::size_of;

/// A varint carries 7 bits per byte, so a `u64` never needs more than ten.
pub const MAX_VARINT_LEN: usize = 10;

/// Header size in contiguous bytes.
pub const HEADER_SIZE: usize =
    // compression flag
    size_of::<u8>() +
        // body length
        size_of::<u32>();

/// Largest envelope body accepted by the frame codec (headers are not
/// included in this capacity). Accounts with long vesting schedules are the
/// biggest records we expect, and they stay well under this.
pub const MAX_FRAME_SIZE: usize = 4 * 1024 * 1024;

