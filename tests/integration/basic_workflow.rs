//! Integration tests for basic workflow scenarios

use crate::common::{MockBus, create_mock_driver, create_uart_driver};
use tmc_registers::registers::Tmc2240;
use tmc_registers::tmc2240::{self, reg};
use tmc_registers::{BusType, ShadowCache, TmcDriver, tmc2225};

#[test]
fn test_complete_configuration_workflow() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_write_to_clear(reg::GSTAT);
    bus.set_register(0, reg::GSTAT, 0x0000_0001);
    bus.set_register(0, reg::IOIN, 0x4000_0000);
    for address in [reg::GCONF, reg::IHOLD_IRUN, reg::CHOPCONF, reg::PWMCONF] {
        bus.set_register(0, address, driver.cache_read(0, address).unwrap());
    }

    // Identify the chip
    assert_eq!(driver.read_field(0, tmc2240::VERSION).unwrap(), 0x40);

    // First power up: clear the reset flag, nothing to restore yet
    assert!(driver.restore_if_reset(0, tmc2240::RESET).unwrap());
    assert_eq!(bus.get_register(0, reg::GSTAT), 0);

    // Configure currents and chopper
    driver.write_field(0, tmc2240::IRUN, 24).unwrap();
    driver.write_field(0, tmc2240::IHOLD, 8).unwrap();
    driver.write_field(0, tmc2240::MRES, 4).unwrap();
    driver.write_field(0, tmc2240::EN_PWM_MODE, 1).unwrap();
    {
        let mut regs = Tmc2240::new(driver.chip(0));
        regs.pwmconf()
            .modify(|w| {
                w.set_pwm_autoscale(true);
                w.set_pwm_grad(20);
            })
            .unwrap();
    }

    assert_eq!(driver.read_field(0, tmc2240::IRUN).unwrap(), 24);
    assert_eq!(driver.read_field(0, tmc2240::IHOLDDELAY).unwrap(), 7);
    assert_eq!(driver.read_field(0, tmc2240::MRES).unwrap(), 4);
    assert_eq!(driver.read_field(0, tmc2240::TOFF).unwrap(), 3);
    assert_eq!(driver.read_field(0, tmc2240::PWM_GRAD).unwrap(), 20);

    // Power loss: the chip forgets everything and raises its reset flag
    let configured: Vec<(u8, u32)> = [reg::GCONF, reg::IHOLD_IRUN, reg::CHOPCONF, reg::PWMCONF]
        .into_iter()
        .map(|address| (address, bus.get_register(0, address)))
        .collect();
    bus.power_cycle();
    bus.set_register(0, reg::GSTAT, 0x0000_0001);

    assert!(driver.restore_if_reset(0, tmc2240::RESET).unwrap());
    for (address, value) in configured {
        assert_eq!(bus.get_register(0, address), value, "register {address:#04x}");
    }
    assert_eq!(bus.get_register(0, reg::GSTAT), 0);

    // Quiet again
    bus.clear_operations();
    assert!(!driver.restore_if_reset(0, tmc2240::RESET).unwrap());
    assert!(bus.written_addresses().is_empty());
}

#[test]
fn test_two_chips_on_one_uart() {
    let (mut driver, bus) = create_uart_driver();
    bus.set_first_node(1);

    driver.write_field(0, tmc2225::IRUN, 10).unwrap();
    driver.write_field(1, tmc2225::IRUN, 20).unwrap();
    driver.write_field(1, tmc2225::VACTUAL, 0u32.wrapping_sub(500)).unwrap();

    assert_eq!(driver.read_field(0, tmc2225::IRUN).unwrap(), 10);
    assert_eq!(driver.read_field(1, tmc2225::IRUN).unwrap(), 20);
    assert_eq!(driver.read_field_signed(0, tmc2225::VACTUAL).unwrap(), 0);
    assert_eq!(driver.read_field_signed(1, tmc2225::VACTUAL).unwrap(), -500);

    // Only chip 1 loses power
    let chip0 = bus.get_register(0, tmc2225::reg::IHOLD_IRUN);
    bus.set_register(1, tmc2225::reg::IHOLD_IRUN, 0x0007_1703);
    bus.set_register(1, tmc2225::reg::VACTUAL, 0);
    bus.clear_operations();

    assert_eq!(driver.restore(1).unwrap(), 2);
    assert_eq!(bus.get_register(1, tmc2225::reg::IHOLD_IRUN), 0x0007_1403);
    assert_eq!(bus.get_register(1, tmc2225::reg::VACTUAL), 0x00FF_FE0C);
    assert_eq!(bus.get_register(0, tmc2225::reg::IHOLD_IRUN), chip0);
}

#[test]
fn test_driver_restart_keeps_chip_state() {
    let bus = MockBus::with_bus(BusType::Spi);

    let mut driver: TmcDriver<_, ShadowCache<1>> =
        TmcDriver::new(bus.clone(), ShadowCache::new(), &tmc2240::MAP);
    driver.write_register(0, reg::MSLUT_0, 0x5555_5555).unwrap();
    let (bus_back, _cache) = driver.release();

    // A new driver starts from the factory tables again
    let mut driver: TmcDriver<_, ShadowCache<1>> =
        TmcDriver::new(bus_back, ShadowCache::new(), &tmc2240::MAP);
    assert_eq!(driver.read_register(0, reg::MSLUT_0).unwrap(), 0xAAAA_B554);
    assert_eq!(bus.get_register(0, reg::MSLUT_0), 0x5555_5555);
    assert_eq!(driver.restore(0).unwrap(), 0);
}
