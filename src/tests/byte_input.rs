//! Tests for the byte-source implementations.

use crate::input::{ByteSource, IterSource, MemorySource};

#[test]
fn memory_source_peek_does_not_advance() {
    let data = [0xAA, 0xBB];
    let mut source = MemorySource::new(&data);
    assert_eq!(source.peek(), Some(0xAA));
    assert_eq!(source.peek(), Some(0xAA));
    assert_eq!(source.position(), 0);
    assert_eq!(source.next(), Some(0xAA));
    assert_eq!(source.position(), 1);
}

#[test]
fn memory_source_reports_end_of_input() {
    let data = [0x01];
    let mut source = MemorySource::new(&data);
    assert!(!source.is_end_of_input());
    assert_eq!(source.next(), Some(0x01));
    assert!(source.is_end_of_input());
    assert_eq!(source.peek(), None);
    assert_eq!(source.next(), None);
}

#[test]
fn memory_source_seek_bounds() {
    let data = [0x01, 0x02, 0x03];
    let mut source = MemorySource::new(&data);
    assert!(source.seek(3));
    assert!(source.is_end_of_input());
    assert!(!source.seek(4));
    assert_eq!(source.position(), 3);
    assert!(source.seek(1));
    assert_eq!(source.next(), Some(0x02));
}

#[test]
fn iter_source_streams_bytes() {
    let mut source = IterSource::new([0x10u8, 0x20, 0x30].into_iter());
    assert_eq!(source.peek(), Some(0x10));
    assert_eq!(source.next(), Some(0x10));
    assert_eq!(source.next(), Some(0x20));
    assert_eq!(source.position(), 2);
    assert_eq!(source.next(), Some(0x30));
    assert_eq!(source.next(), None);
    assert!(source.is_end_of_input());
}

#[test]
fn iter_source_seeks_within_replay_window() {
    let mut source = IterSource::new((0u8..32).into_iter());
    for _ in 0..10 {
        source.next();
    }
    // The failed-instruction rollback never reaches back more than 14
    // bytes; anything inside the 16-byte window must work.
    assert!(source.seek(4));
    assert_eq!(source.next(), Some(4));
    assert_eq!(source.next(), Some(5));
}

#[test]
fn iter_source_rejects_seek_outside_window() {
    let mut source = IterSource::new((0u8..64).into_iter());
    for _ in 0..40 {
        source.next();
    }
    assert!(!source.seek(0));
    assert_eq!(source.position(), 40);
    // Forward seeks past the buffered end are unknowable for a stream.
    assert!(!source.seek(41));
}

#[cfg(feature = "std")]
mod reader {
    use crate::input::{ByteSource, ReaderSource};

    #[test]
    fn reader_source_reads_and_rewinds() {
        let data = [0xDEu8, 0xAD, 0xBE, 0xEF];
        let mut source = ReaderSource::new(&data[..]);
        assert_eq!(source.next(), Some(0xDE));
        assert_eq!(source.next(), Some(0xAD));
        assert!(source.seek(0));
        assert_eq!(source.next(), Some(0xDE));
        assert_eq!(source.position(), 1);
    }
}
