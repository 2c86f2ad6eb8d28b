//! Little-endian memory tests.

use pretty_assertions::assert_eq;
use rv32_core::{Fault, Memory};

#[test]
fn unwritten_memory_reads_zero_everywhere() {
    let mem = Memory::new();
    assert_eq!(mem.read_byte(0).unwrap(), 0);
    assert_eq!(mem.read_half(0xFFFF_0000).unwrap(), 0);
    assert_eq!(mem.read_word(0x8000_0000).unwrap(), 0);
}

#[test]
fn word_store_lays_bytes_out_little_endian() {
    let mut mem = Memory::new();
    mem.write_word(0x100, 0xDEAD_BEEF).unwrap();
    let bytes: Vec<u8> = (0x100..0x104).map(|a| mem.read_byte(a).unwrap()).collect();
    assert_eq!(bytes, vec![0xEF, 0xBE, 0xAD, 0xDE]);
}

#[test]
fn half_access_composes_two_bytes() {
    let mut mem = Memory::new();
    mem.write_half(0x40, 0xBEEF).unwrap();
    assert_eq!(mem.read_byte(0x40).unwrap(), 0xEF);
    assert_eq!(mem.read_byte(0x41).unwrap(), 0xBE);
    assert_eq!(mem.read_half(0x40).unwrap(), 0xBEEF);
}

#[test]
fn unaligned_word_access_is_allowed() {
    let mut mem = Memory::new();
    mem.write_word(0x101, 0x1234_5678).unwrap();
    assert_eq!(mem.read_word(0x101).unwrap(), 0x1234_5678);
    assert_eq!(mem.read_byte(0x101).unwrap(), 0x78);
}

#[test]
fn load_image_places_bytes_from_base() {
    let mut mem = Memory::new();
    mem.load_image(0x200, &[1, 2, 3, 4]).unwrap();
    assert_eq!(mem.read_byte(0x200).unwrap(), 1);
    assert_eq!(mem.read_byte(0x203).unwrap(), 4);
    assert_eq!(mem.read_word(0x200).unwrap(), 0x0403_0201);
}

#[test]
fn populated_iterates_in_address_order() {
    let mut mem = Memory::new();
    mem.write_byte(0x30, 3).unwrap();
    mem.write_byte(0x10, 1).unwrap();
    mem.write_byte(0x20, 2).unwrap();
    let cells: Vec<(u32, u8)> = mem.populated().collect();
    assert_eq!(cells, vec![(0x10, 1), (0x20, 2), (0x30, 3)]);
}

#[test]
fn bound_faults_report_the_offending_address() {
    let mut mem = Memory::bounded(0x1000);
    assert_eq!(
        mem.read_byte(0x1000),
        Err(Fault::MemoryFault { addr: 0x1000 })
    );
    assert_eq!(
        mem.write_word(0x0FFE, 1),
        Err(Fault::MemoryFault { addr: 0x1000 })
    );
    assert!(mem.write_word(0x0FFC, 1).is_ok());
}

#[test]
fn zero_writes_still_populate_cells() {
    let mut mem = Memory::new();
    mem.write_byte(0x50, 0).unwrap();
    assert_eq!(mem.populated().count(), 1);
}
