//! Unit tests for the generated TMC2240 register block

use crate::common::create_mock_driver;
use device_driver::RegisterInterface;
use tmc_registers::Error;
use tmc_registers::registers::Tmc2240;
use tmc_registers::tmc2240::reg;

#[test]
fn test_modify_preserves_other_fields() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0, reg::IHOLD_IRUN, 0x0007_0A03);

    {
        let mut regs = Tmc2240::new(driver.chip(0));
        regs.ihold_irun()
            .modify(|w| {
                w.set_irun(16);
                w.set_ihold(4);
            })
            .unwrap();
    }

    // IHOLD_IRUN is readable on this chip, so the read half came from the bus
    assert_eq!(bus.read_count(reg::IHOLD_IRUN), 1);
    assert_eq!(bus.get_register(0, reg::IHOLD_IRUN), 0x0007_1004);
    assert_eq!(driver.cache_read(0, reg::IHOLD_IRUN), Some(0x0007_1004));
    assert!(driver.dirty_bit(0, reg::IHOLD_IRUN));
}

#[test]
fn test_read_status_fields() {
    let (mut driver, bus) = create_mock_driver();
    bus.set_register(0, reg::DRV_STATUS, 0x800C_0055);
    bus.set_register(0, reg::GSTAT, 0x0000_0001);

    let mut regs = Tmc2240::new(driver.chip(0));
    let status = regs.drv_status().read().unwrap();
    assert!(status.stst());
    assert!(!status.ot());
    assert_eq!(status.cs_actual(), 12);
    assert_eq!(status.sg_result(), 0x55);

    assert!(regs.gstat().read().unwrap().reset());
}

#[test]
fn test_write_threshold() {
    let (mut driver, bus) = create_mock_driver();

    {
        let mut regs = Tmc2240::new(driver.chip(1));
        regs.tpwmthrs().write(|w| w.set_tpwmthrs(500)).unwrap();
    }

    assert_eq!(bus.get_register(1, reg::TPWMTHRS), 500);
    assert_eq!(bus.get_register(0, reg::TPWMTHRS), 0);
}

#[test]
fn test_access_rules_apply() {
    let (mut driver, bus) = create_mock_driver();

    let mut regs = Tmc2240::new(driver.chip(0));
    assert_eq!(
        regs.drv_status().write(|_| {}),
        Err(Error::ReadOnlyRegister(reg::DRV_STATUS))
    );
    assert!(bus.written_addresses().is_empty());
}

#[test]
fn test_chip_interface_width_check() {
    let (mut driver, _bus) = create_mock_driver();
    let mut chip = driver.chip(1);
    assert_eq!(chip.id(), 1);

    let mut narrow = [0u8; 2];
    assert_eq!(
        RegisterInterface::read_register(&mut chip, reg::GCONF, 16, &mut narrow),
        Err(Error::InvalidAccessWidth(16))
    );
    assert_eq!(
        RegisterInterface::write_register(&mut chip, reg::GCONF, 16, &narrow),
        Err(Error::InvalidAccessWidth(16))
    );
}
