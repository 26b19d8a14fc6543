//! Range-to-subnet decomposition.
//!
//! Splits a closed integer interval `[start, end]` into the minimal ordered
//! list of power-of-two-aligned blocks. The core works on `u128` values with
//! the address width as a parameter, so one routine serves both IPv4
//! (width 32) and IPv6 (width 128).

/// A power-of-two-aligned block emitted by [`split_range`].
///
/// `addr` is always divisible by the block size `2^(width - prefix)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Block {
    /// Base address of the block.
    pub addr: u128,
    /// Prefix length, in `1..=width`.
    pub prefix: u8,
}

/// Decompose `[start, end]` into aligned blocks, appended to `out` in
/// ascending base-address order.
///
/// Iterates prefix lengths from 1 up to `width`, so the segment size shrinks
/// from half the address space down to a single address. At each granularity
/// the maximal run of aligned segments inside the remaining interval is
/// emitted; the misaligned leftovers below and above the run are resolved
/// recursively into smaller blocks. The run below `block_start` is recursed
/// before the run is emitted and the leftover above `block_end` after, which
/// is what keeps the output ordered.
///
/// The full address space is never emitted as a single `/0` block: iteration
/// starts at prefix length 1, so `0.0.0.0-255.255.255.255` yields the two
/// `/1` halves instead. A single address yields one `/width` block.
///
/// Recursion depth is bounded by `width`, and at most O(width) blocks are
/// emitted in total.
pub fn split_range(mut start: u128, mut end: u128, width: u8, out: &mut Vec<Block>) {
    debug_assert!(start <= end, "start > end should never happen.");
    debug_assert!(width == 32 || width == 128);

    for prefix in 1..=width {
        let seg_size: u128 = 1 << u32::from(width - prefix);
        let seg_mask = seg_size - 1;

        //
        // Example of round up and round down in an 8-address segment:
        //
        //       |<------ segment ------>|
        //     15 16 17 18 19 20 21 22 23 24
        //          |-> round up to 24
        //         round down to 15 <-|
        //
        // Round start up to the next segment boundary. The add can only
        // overflow at the very top of the address space, where no aligned
        // segment starts at this granularity.
        let block_start = if start & seg_mask == 0 {
            Some(start)
        } else {
            (start | seg_mask).checked_add(1)
        };
        // Round end + 1 down to a segment boundary, minus one. When the low
        // bits of end are all ones it already sits on a boundary, which also
        // covers end == 2^width - 1 without overflowing.
        let block_end = if end & seg_mask == seg_mask {
            Some(end)
        } else {
            match (end + 1) & !seg_mask {
                0 => None,
                down => Some(down - 1),
            }
        };

        if let (Some(block_start), Some(block_end)) = (block_start, block_end) {
            if block_start <= block_end {
                // Leftover below the aligned run is strictly smaller than one
                // segment here and resolves into higher-prefix blocks.
                if start < block_start {
                    split_range(start, block_start - 1, width, out);
                }

                let mut seg_start = block_start;
                while seg_start + seg_mask <= block_end {
                    out.push(Block {
                        addr: seg_start,
                        prefix,
                    });
                    match seg_start.checked_add(seg_size) {
                        Some(next) => seg_start = next,
                        // Emitted through the top of the address space.
                        None => return,
                    }
                }
                start = seg_start;

                if block_end < end {
                    split_range(block_end + 1, end, width, out);
                    end = block_end;
                }

                if start > end {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(start: u128, end: u128, width: u8) -> Vec<Block> {
        let mut out = Vec::new();
        split_range(start, end, width, &mut out);
        out
    }

    #[test]
    fn test_single_address() {
        assert_eq!(blocks(42, 42, 32), vec![Block { addr: 42, prefix: 32 }]);
        assert_eq!(
            blocks(42, 42, 128),
            vec![Block {
                addr: 42,
                prefix: 128
            }]
        );
    }

    #[test]
    fn test_aligned_block() {
        // 0..=255 is exactly one /24 at width 32
        assert_eq!(blocks(0, 255, 32), vec![Block { addr: 0, prefix: 24 }]);
        // 256..=511 likewise
        assert_eq!(
            blocks(256, 511, 32),
            vec![Block {
                addr: 256,
                prefix: 24
            }]
        );
    }

    #[test]
    fn test_misaligned_range() {
        // 192.0.2.1 - 192.0.2.100, the canonical 9-block decomposition
        let got = blocks(3221225985, 3221226084, 32);
        let expected = [
            (3221225985u128, 32u8), // 192.0.2.1/32
            (3221225986, 31),       // 192.0.2.2/31
            (3221225988, 30),       // 192.0.2.4/30
            (3221225992, 29),       // 192.0.2.8/29
            (3221226000, 28),       // 192.0.2.16/28
            (3221226016, 27),       // 192.0.2.32/27
            (3221226048, 27),       // 192.0.2.64/27
            (3221226080, 30),       // 192.0.2.96/30
            (3221226084, 32),       // 192.0.2.100/32
        ];
        let got_pairs: Vec<(u128, u8)> = got.iter().map(|b| (b.addr, b.prefix)).collect();
        assert_eq!(got_pairs, expected);
    }

    #[test]
    fn test_full_ipv4_space_splits_into_halves() {
        // never a /0; the whole space is two /1 blocks
        assert_eq!(
            blocks(0, u128::from(u32::MAX), 32),
            vec![
                Block { addr: 0, prefix: 1 },
                Block {
                    addr: 1 << 31,
                    prefix: 1
                }
            ]
        );
    }

    #[test]
    fn test_full_ipv6_space_splits_into_halves() {
        assert_eq!(
            blocks(0, u128::MAX, 128),
            vec![
                Block { addr: 0, prefix: 1 },
                Block {
                    addr: 1 << 127,
                    prefix: 1
                }
            ]
        );
    }

    #[test]
    fn test_range_ending_at_address_space_top() {
        // 255.255.255.253 - 255.255.255.255
        let top = u128::from(u32::MAX);
        let got = blocks(top - 2, top, 32);
        assert_eq!(
            got,
            vec![
                Block {
                    addr: top - 2,
                    prefix: 32
                },
                Block {
                    addr: top - 1,
                    prefix: 31
                },
            ]
        );
    }

    #[test]
    fn test_range_starting_at_zero() {
        // 0.0.0.0 - 0.0.0.100
        let got = blocks(0, 100, 32);
        let got_pairs: Vec<(u128, u8)> = got.iter().map(|b| (b.addr, b.prefix)).collect();
        assert_eq!(
            got_pairs,
            vec![(0, 26), (64, 27), (96, 30), (100, 32)]
        );
    }

    #[test]
    fn test_ipv6_mirrors_ipv4_pattern() {
        // same 1..=100 offsets as the IPv4 scenario, scaled to width 128
        let base: u128 = 0x20010db8 << 96;
        let got = blocks(base + 1, base + 100, 128);
        let expected = [
            (base + 1, 128u8),
            (base + 2, 127),
            (base + 4, 126),
            (base + 8, 125),
            (base + 16, 124),
            (base + 32, 123),
            (base + 64, 123),
            (base + 96, 126),
            (base + 100, 128),
        ];
        let got_pairs: Vec<(u128, u8)> = got.iter().map(|b| (b.addr, b.prefix)).collect();
        assert_eq!(got_pairs, expected);
    }

    /// Exact-coverage check: ascending, aligned, gap-free, overlap-free.
    fn assert_exact_cover(start: u128, end: u128, width: u8) {
        let got = blocks(start, end, width);
        assert!(!got.is_empty());

        let mut next = start;
        for b in &got {
            assert_eq!(b.addr, next, "gap or overlap before {:#x}", b.addr);
            assert!(b.prefix >= 1 && b.prefix <= width);
            let size: u128 = 1 << u32::from(width - b.prefix);
            assert_eq!(b.addr % size, 0, "block {:#x}/{} misaligned", b.addr, b.prefix);
            next = match b.addr.checked_add(size) {
                Some(n) => n,
                None => {
                    assert_eq!(b.addr - 1 + size, end);
                    return;
                }
            };
        }
        assert_eq!(next, end + 1, "blocks stop short of end");
    }

    #[test]
    fn test_exact_coverage_assorted_ranges() {
        let cases: [(u128, u128); 10] = [
            (0, 0),
            (1, 1),
            (0, 1),
            (1, 2),
            (3, 17),
            (100, 3_000_000),
            (0x0A000001, 0x0AFFFFFE), // 10.0.0.1 - 10.255.255.254
            (0xC0A80001, 0xC0A80064), // 192.168.0.1 - 192.168.0.100
            (0, u32::MAX as u128 - 1),
            (1, u32::MAX as u128),
        ];
        for (start, end) in cases {
            assert_exact_cover(start, end, 32);
        }
    }

    #[test]
    fn test_exact_coverage_ipv6_ranges() {
        let base: u128 = 0x20010db8 << 96;
        let cases: [(u128, u128); 6] = [
            (base, base),
            (base + 1, base + (1 << 70)),
            (base + 12345, base + 987654321),
            (0, u128::MAX - 1),
            (1, u128::MAX),
            (u128::MAX - 2, u128::MAX),
        ];
        for (start, end) in cases {
            assert_exact_cover(start, end, 128);
        }
    }

    #[test]
    fn test_emission_count_stays_bounded() {
        // worst-case misalignment still emits at most ~2*width blocks
        let got = blocks(1, u32::MAX as u128 - 1, 32);
        assert!(got.len() <= 64, "emitted {} blocks", got.len());
    }
}
