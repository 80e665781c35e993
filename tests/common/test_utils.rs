//! Test utilities and helper functions

use crate::common::mock_interface::MockBus;
use tmc_registers::frame::{UART_FRAME_LEN, UART_MASTER_ADDRESS, UART_SYNC, crc8};
use tmc_registers::{BusType, NoCache, ShadowCache, TmcDriver, tmc2225, tmc2240};

/// Driver type used by most tests: two cached chips
pub type MockDriver = TmcDriver<MockBus, ShadowCache<2>>;

/// Create a TMC2240 driver on a mock SPI bus
/// Returns (driver, bus) where bus is a clone that shares state with the driver
pub fn create_mock_driver() -> (MockDriver, MockBus) {
    let bus = MockBus::new();
    let driver = TmcDriver::new(bus.clone(), ShadowCache::new(), &tmc2240::MAP);
    (driver, bus)
}

/// Create a TMC2225 driver on a mock UART bus
pub fn create_uart_driver() -> (MockDriver, MockBus) {
    let bus = MockBus::with_bus(BusType::Uart);
    let driver = TmcDriver::new(bus.clone(), ShadowCache::new(), &tmc2225::MAP);
    (driver, bus)
}

/// Create a TMC2240 driver with caching disabled
pub fn create_uncached_driver() -> (TmcDriver<MockBus, NoCache>, MockBus) {
    let bus = MockBus::new();
    let driver = TmcDriver::new(bus.clone(), NoCache, &tmc2240::MAP);
    (driver, bus)
}

/// UART read reply as sent by a chip
pub fn uart_reply_frame(address: u8, value: u32) -> [u8; UART_FRAME_LEN] {
    let [d3, d2, d1, d0] = value.to_be_bytes();
    let mut frame = [UART_SYNC, UART_MASTER_ADDRESS, address, d3, d2, d1, d0, 0];
    frame[7] = crc8(&frame[..7]);
    frame
}
