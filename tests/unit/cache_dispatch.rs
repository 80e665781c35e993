//! Unit tests for shadow cache seeding and read/write dispatch

use crate::common::{Operation, create_mock_driver, create_uart_driver, create_uncached_driver};
use tmc_registers::tmc2240::{self, reg};
use tmc_registers::{Error, tmc2225};

#[test]
fn test_cache_seeded_on_construction() {
    let (driver, bus) = create_mock_driver();

    assert_eq!(driver.cache_read(0, reg::GCONF), Some(0x0000_2108));
    assert_eq!(driver.cache_read(0, reg::IHOLD_IRUN), Some(0x0007_0A03));
    assert_eq!(driver.cache_read(0, reg::PWMCONF), Some(0xC44C_001E));
    assert_eq!(driver.cache_read(0, reg::MSLUT_0), Some(0xAAAA_B554));
    assert_eq!(driver.cache_read(0, reg::MSLUTSTART), Some(0x00F7_0000));

    // Both cached chips get the same defaults, nothing is dirty
    assert_eq!(driver.cache_read(1, reg::CHOPCONF), Some(0x1441_0153));
    assert!(!driver.dirty_bit(0, reg::GCONF));
    assert!(!driver.dirty_bit(1, reg::MSLUT_0));
    assert_eq!(driver.cache().dirty_count(0), 0);

    // Seeding never touches the bus
    assert!(bus.operations().is_empty());
}

#[test]
fn test_reserved_and_unknown_entries_stay_zero() {
    let (driver, _bus) = create_mock_driver();

    assert_eq!(driver.cache_read(0, 0x1B), Some(0));
    assert!(!driver.dirty_bit(0, 0x1B));
    assert_eq!(driver.cache_read(0, reg::DRV_STATUS), Some(0));
}

#[test]
fn test_chip_beyond_capacity_is_not_cached() {
    let (driver, _bus) = create_mock_driver();
    assert_eq!(driver.cache_read(2, reg::GCONF), None);
    assert!(!driver.dirty_bit(2, reg::GCONF));
}

#[test]
fn test_readable_register_reads_bus() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0, reg::GCONF, 0x0000_0004);

    // The chip value wins over the seeded default
    assert_eq!(driver.read_register(0, reg::GCONF).unwrap(), 0x0000_0004);
    assert!(bus.read_count(reg::GCONF) > 0);
}

#[test]
fn test_read_only_register_reads_bus_every_time() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0, reg::TSTEP, 100);
    assert_eq!(driver.read_register(0, reg::TSTEP).unwrap(), 100);

    bus.set_register(0, reg::TSTEP, 200);
    assert_eq!(driver.read_register(0, reg::TSTEP).unwrap(), 200);
}

#[test]
fn test_write_only_register_reads_shadow() {
    let (mut driver, bus) = create_mock_driver();

    // The chip would answer 0, the shadow holds the factory table
    assert_eq!(driver.read_register(0, reg::MSLUT_1).unwrap(), 0x4A95_54AA);
    assert!(bus.operations().is_empty());
}

#[test]
fn test_write_then_read_write_only_register() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(0, reg::MSLUT_0, 0x1234_5678).unwrap();
    assert_eq!(
        bus.operations(),
        vec![Operation::Write {
            chip: 0,
            address: reg::MSLUT_0,
            value: 0x1234_5678
        }]
    );
    assert!(driver.dirty_bit(0, reg::MSLUT_0));

    bus.clear_operations();
    assert_eq!(driver.read_register(0, reg::MSLUT_0).unwrap(), 0x1234_5678);
    assert!(bus.operations().is_empty());
}

#[test]
fn test_fill_then_read_stays_clean() {
    let (mut driver, bus) = create_mock_driver();

    assert!(driver.cache_fill_default(0, reg::MSLUT_2, 0xCAFE_0000));
    assert_eq!(driver.read_register(0, reg::MSLUT_2).unwrap(), 0xCAFE_0000);
    assert!(!driver.dirty_bit(0, reg::MSLUT_2));
    assert!(bus.operations().is_empty());
}

#[test]
fn test_every_write_is_shadowed() {
    let (mut driver, _bus) = create_mock_driver();

    driver.write_register(0, reg::TPWMTHRS, 500).unwrap();
    assert_eq!(driver.cache_read(0, reg::TPWMTHRS), Some(500));
    assert!(driver.dirty_bit(0, reg::TPWMTHRS));

    // Flag registers too
    driver.write_register(0, reg::GCONF, 0x2109).unwrap();
    assert!(driver.dirty_bit(0, reg::GCONF));
}

#[test]
fn test_flag_acknowledge_is_not_shadowed() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(0, reg::GSTAT, 0x1F).unwrap();
    assert_eq!(bus.get_register(0, reg::GSTAT), 0x1F);
    assert!(!driver.dirty_bit(0, reg::GSTAT));
    assert_eq!(driver.cache_read(0, reg::GSTAT), Some(0));

    assert!(!driver.cache_write(0, reg::ENC_STATUS, 0x3).unwrap());
    assert!(!driver.dirty_bit(0, reg::ENC_STATUS));
}

#[test]
fn test_chips_have_independent_shadows() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(1, reg::MSLUT_3, 7).unwrap();
    assert_eq!(driver.read_register(1, reg::MSLUT_3).unwrap(), 7);
    assert_eq!(driver.read_register(0, reg::MSLUT_3).unwrap(), 0x1010_4222);
    assert!(!driver.dirty_bit(0, reg::MSLUT_3));
    assert_eq!(bus.get_register(1, reg::MSLUT_3), 7);
    assert_eq!(bus.get_register(0, reg::MSLUT_3), 0);
}

#[test]
fn test_cache_write_forwards_to_bus() {
    let (mut driver, bus) = create_mock_driver();

    assert!(driver.cache_write(0, reg::MSLUT_4, 9).unwrap());
    assert_eq!(bus.get_register(0, reg::MSLUT_4), 9);
    assert_eq!(
        bus.operations(),
        vec![Operation::Write {
            chip: 0,
            address: reg::MSLUT_4,
            value: 9,
        }]
    );
    assert_eq!(driver.read_register(0, reg::MSLUT_4).unwrap(), 9);
    assert!(driver.dirty_bit(0, reg::MSLUT_4));

    // Chip 2 has no cache slot: the chip still gets the word
    assert!(!driver.cache_write(2, reg::MSLUT_4, 9).unwrap());
    assert_eq!(bus.get_register(2, reg::MSLUT_4), 9);
}

#[test]
fn test_cache_write_failure_leaves_shadow_untouched() {
    let (mut driver, bus) = create_mock_driver();
    bus.fail_next_write();

    assert!(driver.cache_write(0, reg::MSLUT_4, 9).is_err());
    assert_eq!(driver.cache_read(0, reg::MSLUT_4), Some(0xFBFF_FFFF));
    assert!(!driver.dirty_bit(0, reg::MSLUT_4));

    assert_eq!(
        driver.cache_write(0, reg::DRV_STATUS, 1),
        Err(Error::ReadOnlyRegister(reg::DRV_STATUS))
    );
}

#[test]
fn test_set_dirty_bit() {
    let (mut driver, _bus) = create_mock_driver();

    driver.set_dirty_bit(0, reg::GCONF, true);
    assert!(driver.dirty_bit(0, reg::GCONF));
    driver.set_dirty_bit(0, reg::GCONF, false);
    assert!(!driver.dirty_bit(0, reg::GCONF));
}

#[test]
fn test_init_cache_resets_writes() {
    let (mut driver, _bus) = create_mock_driver();

    driver.write_register(0, reg::MSLUT_0, 1).unwrap();
    driver.write_register(1, reg::GCONF, 2).unwrap();
    driver.init_cache();

    assert_eq!(driver.cache_read(0, reg::MSLUT_0), Some(0xAAAA_B554));
    assert_eq!(driver.cache_read(1, reg::GCONF), Some(0x0000_2108));
    assert!(!driver.dirty_bit(0, reg::MSLUT_0));
    assert!(!driver.dirty_bit(1, reg::GCONF));
}

#[test]
fn test_tmc2225_write_only_defaults() {
    let (mut driver, bus) = create_uart_driver();

    assert_eq!(driver.read_register(0, tmc2225::reg::IHOLD_IRUN).unwrap(), 0x0007_1703);
    assert_eq!(driver.read_register(0, tmc2225::reg::TPOWERDOWN).unwrap(), 0x14);
    assert_eq!(driver.read_register(1, tmc2225::reg::VACTUAL).unwrap(), 0);
    assert!(bus.operations().is_empty());
}

#[test]
fn test_uncached_write_only_read_fails() {
    let (mut driver, bus) = create_uncached_driver();

    assert_eq!(
        driver.read_register(0, reg::MSLUT_0),
        Err(Error::WriteOnlyUncached(reg::MSLUT_0))
    );
    assert!(bus.operations().is_empty());

    // Writes still reach the chip
    driver.write_register(0, reg::MSLUT_0, 3).unwrap();
    assert_eq!(bus.get_register(0, reg::MSLUT_0), 3);
    assert!(!driver.dirty_bit(0, reg::MSLUT_0));
}

#[test]
fn test_uncached_chip_write_only_read_fails() {
    let (mut driver, _bus) = create_mock_driver();

    driver.write_register(5, reg::MSLUT_0, 3).unwrap();
    assert_eq!(
        driver.read_field(5, tmc2240::X1),
        Err(Error::WriteOnlyUncached(reg::MSLUTSEL))
    );
}
