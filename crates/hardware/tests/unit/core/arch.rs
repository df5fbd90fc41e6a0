//! # Architectural State Tests
//!
//! Register file slot handling and PSW computation.

use rstest::rstest;

use dlw1_core::common::RegisterId;
use dlw1_core::core::arch::{Gpr, Psw};

#[test]
fn test_gpr_starts_zeroed() {
    assert_eq!(Gpr::new().as_array(), [0; 4]);
}

#[test]
fn test_gpr_write_only_touches_target() {
    let mut gpr = Gpr::new();
    gpr.write(RegisterId::C, 0xAA);
    assert_eq!(gpr.as_array(), [0, 0, 0xAA, 0]);
}

#[test]
fn test_gpr_empty_slot_reads_zero_and_ignores_writes() {
    let mut gpr = Gpr::from_array([1, 2, 3, 4]);
    assert_eq!(gpr.read_slot(None), 0);
    gpr.write_slot(None, 99);
    assert_eq!(gpr.as_array(), [1, 2, 3, 4]);
    gpr.write_slot(Some(RegisterId::B), 99);
    assert_eq!(gpr.read(RegisterId::B), 99);
}

#[rstest]
#[case(0, Psw::Zero)]
#[case(1, Psw::None)]
#[case(127, Psw::None)]
#[case(128, Psw::Negative)]
#[case(255, Psw::Negative)]
fn test_psw_from_result(#[case] result: u8, #[case] want: Psw) {
    assert_eq!(Psw::from_result(result), want);
}

#[test]
fn test_psw_encoding() {
    assert_eq!(Psw::None.bits(), 0b00);
    assert_eq!(Psw::Zero.bits(), 0b01);
    assert_eq!(Psw::Negative.bits(), 0b10);
    assert_eq!(Psw::from_bits(0b11), Psw::None);
}
