//! Unit tests for replaying the shadow cache after a chip reset

use crate::common::mock_interface::MockError;
use crate::common::{create_mock_driver, create_uart_driver};
use tmc_registers::tmc2240::{self, reg};
use tmc_registers::{Error, tmc2225};

#[test]
fn test_fresh_cache_restores_nothing() {
    let (mut driver, bus) = create_mock_driver();

    assert_eq!(driver.restore(0).unwrap(), 0);
    assert!(bus.operations().is_empty());
}

#[test]
fn test_restore_replays_dirty_entries_in_address_order() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(0, reg::CHOPCONF, 0x1441_0155).unwrap();
    driver.write_register(0, reg::IHOLD_IRUN, 0x0007_1004).unwrap();
    driver.write_register(0, reg::GCONF, 0x0000_0004).unwrap();

    bus.power_cycle();
    bus.clear_operations();

    assert_eq!(driver.restore(0).unwrap(), 3);
    assert_eq!(
        bus.written_addresses(),
        vec![reg::GCONF, reg::IHOLD_IRUN, reg::CHOPCONF]
    );
    assert_eq!(bus.get_register(0, reg::GCONF), 0x0000_0004);
    assert_eq!(bus.get_register(0, reg::IHOLD_IRUN), 0x0007_1004);
    assert_eq!(bus.get_register(0, reg::CHOPCONF), 0x1441_0155);

    // Dirty bits survive the replay
    assert!(driver.dirty_bit(0, reg::GCONF));
}

#[test]
fn test_restore_skips_filled_entries() {
    let (mut driver, bus) = create_mock_driver();

    driver.cache_fill_default(0, reg::TPWMTHRS, 77);
    driver.write_register(0, reg::TCOOLTHRS, 88).unwrap();
    bus.clear_operations();

    assert_eq!(driver.restore(0).unwrap(), 1);
    assert_eq!(bus.written_addresses(), vec![reg::TCOOLTHRS]);
}

#[test]
fn test_restore_only_touches_one_chip() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(0, reg::GCONF, 1).unwrap();
    driver.write_register(1, reg::GCONF, 2).unwrap();
    bus.clear_operations();

    assert_eq!(driver.restore(1).unwrap(), 1);
    assert_eq!(
        bus.operations(),
        vec![crate::common::Operation::Write {
            chip: 1,
            address: reg::GCONF,
            value: 2
        }]
    );
}

#[test]
fn test_written_value_survives_reinit_only_on_chip() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(0, reg::MSLUT_0, 0x0102_0304).unwrap();
    driver.init_cache();

    // Shadow is back at the factory table and clean, the chip keeps the write
    assert_eq!(driver.cache_read(0, reg::MSLUT_0), Some(0xAAAA_B554));
    assert!(!driver.dirty_bit(0, reg::MSLUT_0));
    assert_eq!(bus.get_register(0, reg::MSLUT_0), 0x0102_0304);

    bus.clear_operations();
    assert_eq!(driver.restore(0).unwrap(), 0);
    assert!(bus.operations().is_empty());
}

#[test]
fn test_restore_stops_at_first_failure() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(0, reg::GCONF, 1).unwrap();
    driver.write_register(0, reg::IHOLD_IRUN, 2).unwrap();
    driver.write_register(0, reg::CHOPCONF, 3).unwrap();
    bus.clear_operations();

    bus.fail_write_at(reg::IHOLD_IRUN);
    assert_eq!(driver.restore(0), Err(Error::Bus(MockError::Communication)));
    assert_eq!(bus.written_addresses(), vec![reg::GCONF]);

    // A second attempt replays everything
    bus.clear_operations();
    assert_eq!(driver.restore(0).unwrap(), 3);
}

#[test]
fn test_restore_if_reset_after_power_loss() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_write_to_clear(reg::GSTAT);

    driver.write_field(0, tmc2240::IRUN, 20).unwrap();
    driver.write_field(0, tmc2240::TOFF, 4).unwrap();
    let current = bus.get_register(0, reg::IHOLD_IRUN);
    let chopper = bus.get_register(0, reg::CHOPCONF);

    bus.power_cycle();
    bus.set_register(0, reg::GSTAT, 0x0000_0001);

    assert!(driver.restore_if_reset(0, tmc2240::RESET).unwrap());
    assert_eq!(bus.get_register(0, reg::IHOLD_IRUN), current);
    assert_eq!(bus.get_register(0, reg::CHOPCONF), chopper);
    assert_eq!(bus.get_register(0, reg::GSTAT), 0);
}

#[test]
fn test_restore_if_reset_without_reset() {
    let (mut driver, bus) = create_mock_driver();

    driver.write_register(0, reg::GCONF, 1).unwrap();
    bus.clear_operations();

    assert!(!driver.restore_if_reset(0, tmc2240::RESET).unwrap());
    assert!(bus.written_addresses().is_empty());
}

#[test]
fn test_restore_over_uart() {
    let (mut driver, bus) = create_uart_driver();

    driver.write_field(1, tmc2225::IRUN, 16).unwrap();
    driver.write_register(1, tmc2225::reg::TPOWERDOWN, 0x20).unwrap();
    bus.power_cycle();

    assert_eq!(driver.restore(1).unwrap(), 2);
    assert_eq!(bus.get_register(1, tmc2225::reg::IHOLD_IRUN), 0x0007_1003);
    assert_eq!(bus.get_register(1, tmc2225::reg::TPOWERDOWN), 0x20);
}

#[test]
fn test_restore_skips_flag_registers() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_write_to_clear(reg::GSTAT);

    // Acknowledge a driver error, then configure
    bus.set_register(0, reg::GSTAT, 0x0000_0002);
    driver.write_field(0, tmc2240::DRV_ERR, 1).unwrap();
    assert_eq!(bus.get_register(0, reg::GSTAT), 0);
    driver.write_field(0, tmc2240::IRUN, 12).unwrap();

    // The chip resets with a fresh driver error pending
    bus.power_cycle();
    bus.set_register(0, reg::GSTAT, 0x0000_0003);
    bus.clear_operations();

    assert_eq!(driver.restore(0).unwrap(), 1);
    assert_eq!(bus.written_addresses(), vec![reg::IHOLD_IRUN]);
    assert_eq!(bus.get_register(0, reg::GSTAT), 0x0000_0003);
}

#[test]
fn test_restore_if_reset_keeps_other_flags() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_write_to_clear(reg::GSTAT);
    bus.set_register(0, reg::GSTAT, 0x0000_0001);

    assert!(driver.restore_if_reset(0, tmc2240::RESET).unwrap());
    assert!(!driver.dirty_bit(0, reg::GSTAT));

    // A later reset is still reported after another restore
    bus.set_register(0, reg::GSTAT, 0x0000_0003);
    driver.restore(0).unwrap();
    assert_eq!(bus.get_register(0, reg::GSTAT), 0x0000_0003);

    assert!(driver.restore_if_reset(0, tmc2240::RESET).unwrap());
    assert_eq!(bus.get_register(0, reg::GSTAT), 0x0000_0002);
}
