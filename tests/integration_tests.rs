// tests/integration_tests.rs
//! Integration tests: end-to-end properties of the sequence buffer.

use seqbuf::prelude::*;
use std::sync::Arc;

#[test]
fn test_content_matches_edit_history() {
    // Interleaved appends, prepends, and inserts land exactly where asked.
    let mut buf = SeqBuffer::<u8>::new(16);
    buf.append(1, b"cd").unwrap();
    buf.prepend(1, b"ab").unwrap();
    buf.insert(2, 1, b"--").unwrap();
    buf.append(1, b"ef").unwrap();
    buf.insert(0, 1, b">").unwrap();
    assert_eq!(buf.as_slice(), b">ab--cdef");
}

#[test]
fn test_insert_remove_round_trip() {
    let original = b"the quick brown fox";
    for index in 0..=original.len() {
        for count in [1usize, 2, 5] {
            let mut buf = SeqBuffer::<u8>::from_slice(original);
            buf.insert(index, count, b"XYZ").unwrap();
            buf.remove(index, count * 3).unwrap();
            assert_eq!(
                buf.as_slice(),
                original,
                "round trip failed at index {index}, count {count}"
            );
        }
    }
}

#[test]
fn test_reverse_is_an_involution() {
    let mut buf = SeqBuffer::<u8>::from_slice(b"abcdefg");
    buf.reverse();
    buf.reverse();
    assert_eq!(buf.as_slice(), b"abcdefg");

    let mut buf = SeqBuffer::<u8>::from_slice(b"ab");
    buf.reverse();
    buf.reverse();
    assert_eq!(buf.as_slice(), b"ab");
}

#[test]
fn test_normalize_idempotence() {
    let mut once = SeqBuffer::<u8>::from_slice(b"aaabbbcccaaa");
    once.normalize_adjacent_duplicates();
    let mut twice = once.clone();
    twice.normalize_adjacent_duplicates();
    assert_eq!(once, twice);
    assert_eq!(once.as_slice(), b"abca");
}

#[test]
fn test_remove_all_postcondition() {
    let mut buf = SeqBuffer::<u8>::from_slice(b"x1y22z333");
    let matching = buf.iter().filter(|e| e.is_ascii_digit()).count();
    let removed = buf.remove_all(|e| e.is_ascii_digit());

    assert_eq!(removed, matching);
    assert!(!buf.iter().any(|e| e.is_ascii_digit()));
    assert_eq!(buf.as_slice(), b"xyz", "survivor order preserved");
}

#[test]
fn test_pad_left_postcondition() {
    let original = b"core";
    let mut buf = SeqBuffer::<u8>::from_slice(original);
    buf.pad_left(10, b"*=").unwrap();

    assert_eq!(buf.len(), 10);
    // The rightmost original-length elements are untouched.
    assert_eq!(&buf.as_slice()[10 - original.len()..], original);

    // Already wide enough: length stays at max(width, len).
    let mut wide = SeqBuffer::<u8>::from_slice(b"0123456789ab");
    wide.pad_left(10, b"*").unwrap();
    assert_eq!(wide.len(), 12);
}

#[test]
fn test_amortized_growth_bound() {
    // N sequential appends from default capacity must trigger O(log N)
    // reallocations, not O(N). Every backing array comes from the pool, so
    // fresh allocations count reallocations (plus one initial rental).
    const N: usize = 1000;
    let pool = Arc::new(ArrayPool::<u8>::new(PoolConfig::default()));
    let mut buf = SeqBuffer::with_pool(0, pool.clone());
    for i in 0..N {
        buf.append(1, &[i as u8]).unwrap();
    }
    assert_eq!(buf.len(), N);

    let bound = (usize::BITS - (N - 1).leading_zeros()) as usize + 1; // ceil(log2 N) + 1
    let allocations = pool.stats().allocated;
    assert!(
        allocations <= bound,
        "{allocations} allocations for {N} appends, bound {bound}"
    );
}

#[test]
fn test_mixed_direction_editing_keeps_slack_balanced() {
    // Alternating front/back edits with interior removals must not thrash
    // reallocations: the remove compaction feeds the scarcer side.
    let pool = Arc::new(ArrayPool::<u8>::new(PoolConfig::default()));
    let mut buf = SeqBuffer::with_pool(64, pool.clone());
    buf.append(1, b"0123456789012345678901234567890123456789").unwrap();
    let settled = pool.stats().allocated;

    for _ in 0..200 {
        buf.prepend(1, b"p").unwrap();
        buf.append(1, b"a").unwrap();
        buf.remove(buf.len() / 2, 2).unwrap();
    }
    assert_eq!(buf.len(), 40);
    assert_eq!(
        pool.stats().allocated,
        settled,
        "steady-state editing must not reallocate"
    );
}

#[test]
fn test_pattern_pipeline() {
    let mut buf = SeqBuffer::<u8>::from_slice(b"  report:   draft,,draft  ");
    buf.normalize_all(|e| *e == b' ', &b' ');
    assert_eq!(buf.as_slice(), b"report: draft,,draft");

    buf.replace_pattern(b",,", 1, b" & ").unwrap();
    assert_eq!(buf.as_slice(), b"report: draft & draft");

    buf.remove_pattern(b"draft ").unwrap();
    assert_eq!(buf.as_slice(), b"report: & draft");
}

#[test]
fn test_buffer_reuse_through_pool() {
    let pool = Arc::new(ArrayPool::<u8>::new(PoolConfig::default()));
    {
        let mut buf = SeqBuffer::with_pool(256, pool.clone());
        buf.append(1, b"transient").unwrap();
        buf.recycle();
    }
    let before = pool.stats().allocated;
    let buf = SeqBuffer::with_pool(256, pool.clone());
    assert_eq!(pool.stats().allocated, before, "array came from the pool");
    assert!(buf.is_empty());
}

#[test]
fn test_errors_leave_buffer_unchanged() {
    let mut buf = SeqBuffer::<u8>::from_slice(b"stable");
    let snapshot = buf.clone();

    assert!(buf.insert(10, 1, b"x").is_err());
    assert!(buf.remove(3, 10).is_err());
    assert!(buf.append(0, b"x").is_err());
    assert!(buf.pad_left(20, b"").is_err());
    assert!(buf.swap(0, 6).is_err());

    assert_eq!(buf, snapshot);
    assert_eq!(buf.capacity(), snapshot.capacity());
}

#[test]
fn test_large_document_editing() {
    // A longer mixed workload exercising every growth tier.
    let mut buf = SeqBuffer::<u8>::new(16);
    for _ in 0..50 {
        buf.append(1, b"lorem ipsum ").unwrap();
    }
    assert_eq!(buf.len(), 600);

    buf.replace_pattern(b"ipsum", 1, b"IPSUM!").unwrap();
    assert_eq!(buf.len(), 650);

    let removed = buf.remove_all(|e| *e == b' ');
    assert_eq!(removed, 100);
    assert_eq!(buf.len(), 550);

    buf.remove_from(11).unwrap();
    assert_eq!(buf.as_slice(), b"loremIPSUM!");
}
