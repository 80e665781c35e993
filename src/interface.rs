//! Bus transport for register datagrams
//!
//! The driver never talks to a peripheral directly. It frames each register access as
//! an SPI or UART datagram (see [`crate::frame`]) and hands the bytes to a [`TmcBus`]
//! implementation, which only has to move them over the wire for the given chip id.
//!
//! Two ready-made transports are provided:
//! - [`SpiInterface`] for an `embedded-hal` [`SpiDevice`](embedded_hal::spi::SpiDevice)
//! - [`UartInterface`] for an `embedded-io` serial port wired as a single-wire UART

use embedded_io::ReadExactError;

/// Physical bus a chip is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusType {
    /// 4-wire SPI, 40-bit datagrams
    Spi,
    /// Single-wire UART, CRC protected datagrams
    Uart,
    /// Wireless bridge, not supported by the register layer
    Wlan,
}

/// Transport used by [`crate::TmcDriver`] to exchange datagrams with a chip
pub trait TmcBus {
    /// Transport error
    type Error;

    /// Bus the chip is attached to
    fn bus_type(&self, chip: u16) -> BusType;

    /// UART node address of the chip, `None` if the id cannot be addressed
    fn node_address(&self, chip: u16) -> Option<u8>;

    /// Full-duplex exchange: `data` is sent and overwritten with the received bytes
    ///
    /// # Errors
    ///
    /// Returns the transport error if the exchange fails.
    fn read_write_spi(&mut self, chip: u16, data: &mut [u8]) -> Result<(), Self::Error>;

    /// Half-duplex exchange: send `data[..write_len]`, then receive `read_len` bytes
    /// into `data[..read_len]`. `read_len` is zero for writes.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request cannot be sent or the reply is not
    /// received completely.
    fn read_write_uart(
        &mut self,
        chip: u16,
        data: &mut [u8],
        write_len: usize,
        read_len: usize,
    ) -> Result<(), Self::Error>;
}

/// Error reported by the provided transports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError<E> {
    /// Error from the underlying peripheral
    Bus(E),
    /// The serial port ran out of data before the reply was complete
    UnexpectedEof,
    /// The bytes echoed on the single wire differ from the bytes sent
    EchoMismatch,
    /// The transport was asked to use a bus it does not drive
    WrongBus(BusType),
    /// The datagram does not fit the transport's buffer
    FrameTooLong(usize),
}

impl<E> From<ReadExactError<E>> for InterfaceError<E> {
    fn from(error: ReadExactError<E>) -> Self {
        match error {
            ReadExactError::UnexpectedEof => Self::UnexpectedEof,
            ReadExactError::Other(error) => Self::Bus(error),
        }
    }
}

/// SPI transport
///
/// # Note on Chip Select
///
/// The chip select line is owned by the [`SpiDevice`](embedded_hal::spi::SpiDevice)
/// implementation, so one `SpiInterface` drives exactly one chip. The chip id passed
/// by the driver only selects the cache slot.
///
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI transport
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the transport and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> TmcBus for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = InterfaceError<E>;

    fn bus_type(&self, _chip: u16) -> BusType {
        BusType::Spi
    }

    fn node_address(&self, _chip: u16) -> Option<u8> {
        Some(0)
    }

    fn read_write_spi(&mut self, _chip: u16, data: &mut [u8]) -> Result<(), Self::Error> {
        self.spi.transfer_in_place(data).map_err(InterfaceError::Bus)
    }

    fn read_write_uart(
        &mut self,
        _chip: u16,
        _data: &mut [u8],
        _write_len: usize,
        _read_len: usize,
    ) -> Result<(), Self::Error> {
        Err(InterfaceError::WrongBus(BusType::Uart))
    }
}

const UART_BUFFER_LEN: usize = 8;

/// Single-wire UART transport
///
/// Several chips can share one wire; each listens to its own node address. Chip id
/// `n` is addressed as node `first_node + n`, and ids that would take the node
/// address past 255 are rejected. How many nodes a chip can be strapped to is a
/// property of the chip (four on the TMC2225).
///
/// When TX and RX are tied together the port receives its own request before the
/// reply. Enable [`with_echo`](Self::with_echo) to consume and check those bytes.
pub struct UartInterface<S> {
    serial: S,
    first_node: u8,
    echo: bool,
}

impl<S> UartInterface<S> {
    /// Create a new UART transport starting at node address 0, without echo
    pub const fn new(serial: S) -> Self {
        Self {
            serial,
            first_node: 0,
            echo: false,
        }
    }

    /// Node address used for chip id 0
    #[must_use]
    pub const fn with_first_node(mut self, first_node: u8) -> Self {
        self.first_node = first_node;
        self
    }

    /// Discard and verify the echo of every request
    #[must_use]
    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Consume the transport and return the serial port
    pub fn release(self) -> S {
        self.serial
    }
}

impl<S, E> TmcBus for UartInterface<S>
where
    S: embedded_io::Read + embedded_io::Write + embedded_io::ErrorType<Error = E>,
{
    type Error = InterfaceError<E>;

    fn bus_type(&self, _chip: u16) -> BusType {
        BusType::Uart
    }

    fn node_address(&self, chip: u16) -> Option<u8> {
        u8::try_from(chip)
            .ok()
            .and_then(|offset| self.first_node.checked_add(offset))
    }

    fn read_write_spi(&mut self, _chip: u16, _data: &mut [u8]) -> Result<(), Self::Error> {
        Err(InterfaceError::WrongBus(BusType::Spi))
    }

    fn read_write_uart(
        &mut self,
        _chip: u16,
        data: &mut [u8],
        write_len: usize,
        read_len: usize,
    ) -> Result<(), Self::Error> {
        if write_len > UART_BUFFER_LEN || write_len > data.len() {
            return Err(InterfaceError::FrameTooLong(write_len));
        }
        if read_len > data.len() {
            return Err(InterfaceError::FrameTooLong(read_len));
        }

        self.serial
            .write_all(&data[..write_len])
            .map_err(InterfaceError::Bus)?;
        self.serial.flush().map_err(InterfaceError::Bus)?;

        if self.echo {
            let mut echo = [0u8; UART_BUFFER_LEN];
            self.serial.read_exact(&mut echo[..write_len])?;
            if echo[..write_len] != data[..write_len] {
                return Err(InterfaceError::EchoMismatch);
            }
        }

        if read_len > 0 {
            self.serial.read_exact(&mut data[..read_len])?;
        }

        Ok(())
    }
}
