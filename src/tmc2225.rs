//! TMC2225 register table and field definitions
//!
//! The TMC2225 is a UART-only driver from the TMC220x family. Most of its
//! configuration registers are write-only, so reading them back depends entirely on
//! the shadow cache. It has no hardware-preset registers.

use crate::access::{Access, RegisterMap};
use crate::field::RegisterField;

/// Register addresses
pub mod reg {
    /// Global configuration
    pub const GCONF: u8 = 0x00;
    /// Global status flags
    pub const GSTAT: u8 = 0x01;
    /// UART write counter
    pub const IFCNT: u8 = 0x02;
    /// UART reply delay
    pub const SLAVECONF: u8 = 0x03;
    /// OTP programming
    pub const OTP_PROG: u8 = 0x04;
    /// OTP content
    pub const OTP_READ: u8 = 0x05;
    /// Input pin states and version
    pub const IOIN: u8 = 0x06;
    /// Factory trim
    pub const FACTORY_CONF: u8 = 0x07;
    /// Run and hold current
    pub const IHOLD_IRUN: u8 = 0x10;
    /// Standstill power down delay
    pub const TPOWERDOWN: u8 = 0x11;
    /// Measured microstep time
    pub const TSTEP: u8 = 0x12;
    /// StealthChop upper velocity
    pub const TPWMTHRS: u8 = 0x13;
    /// Velocity set through UART
    pub const VACTUAL: u8 = 0x22;
    /// Microstep counter
    pub const MSCNT: u8 = 0x6A;
    /// Actual coil currents
    pub const MSCURACT: u8 = 0x6B;
    /// Chopper configuration
    pub const CHOPCONF: u8 = 0x6C;
    /// Driver status
    pub const DRVSTATUS: u8 = 0x6F;
    /// StealthChop configuration
    pub const PWMCONF: u8 = 0x70;
    /// StealthChop amplitude scaling
    pub const PWM_SCALE: u8 = 0x71;
    /// StealthChop automatic tuning results
    pub const PWM_AUTO: u8 = 0x72;
}

/// TMC2225 register table
pub const MAP: RegisterMap = RegisterMap::new("TMC2225")
    .register(reg::GCONF, Access::ReadWrite, 0x0000_0040)
    .register(reg::GSTAT, Access::ReadWriteClear, 0)
    .register(reg::IFCNT, Access::Read, 0)
    .register(reg::SLAVECONF, Access::Write, 0)
    .register(reg::OTP_PROG, Access::Write, 0)
    .register(reg::OTP_READ, Access::Read, 0)
    .register(reg::IOIN, Access::Read, 0)
    .register(reg::FACTORY_CONF, Access::ReadWrite, 0)
    .register(reg::IHOLD_IRUN, Access::Write, 0x0007_1703)
    .register(reg::TPOWERDOWN, Access::Write, 0x0000_0014)
    .register(reg::TSTEP, Access::Read, 0)
    .register(reg::TPWMTHRS, Access::Write, 0)
    .register(reg::VACTUAL, Access::Write, 0)
    .register(reg::MSCNT, Access::Read, 0)
    .register(reg::MSCURACT, Access::Read, 0)
    .register(reg::CHOPCONF, Access::ReadWrite, 0x1000_0053)
    .register(reg::DRVSTATUS, Access::Read, 0)
    .register(reg::PWMCONF, Access::ReadWrite, 0xC10D_0024)
    .register(reg::PWM_SCALE, Access::Read, 0)
    .register(reg::PWM_AUTO, Access::Read, 0);

/// Use external VREF for current scaling
pub const I_SCALE_ANALOG: RegisterField = RegisterField::new(0x0000_0001, 0, reg::GCONF);
/// Use internal sense resistors
pub const INTERNAL_RSENSE: RegisterField = RegisterField::new(0x0000_0002, 1, reg::GCONF);
/// SpreadCycle instead of StealthChop
pub const EN_SPREADCYCLE: RegisterField = RegisterField::new(0x0000_0004, 2, reg::GCONF);
/// Invert motor direction
pub const SHAFT: RegisterField = RegisterField::new(0x0000_0008, 3, reg::GCONF);
/// INDEX pin signals overtemperature prewarning
pub const INDEX_OTPW: RegisterField = RegisterField::new(0x0000_0010, 4, reg::GCONF);
/// INDEX pin outputs step pulses
pub const INDEX_STEP: RegisterField = RegisterField::new(0x0000_0020, 5, reg::GCONF);
/// Disable PDN function on the UART pin
pub const PDN_DISABLE: RegisterField = RegisterField::new(0x0000_0040, 6, reg::GCONF);
/// Microstep resolution from MRES instead of pins
pub const MSTEP_REG_SELECT: RegisterField = RegisterField::new(0x0000_0080, 7, reg::GCONF);
/// Step pulse filter
pub const MULTISTEP_FILT: RegisterField = RegisterField::new(0x0000_0100, 8, reg::GCONF);
/// Factory test mode
pub const TEST_MODE: RegisterField = RegisterField::new(0x0000_0200, 9, reg::GCONF);

/// Chip was reset since the flag was last cleared
pub const RESET: RegisterField = RegisterField::new(0x0000_0001, 0, reg::GSTAT);
/// Driver shut down on overtemperature or short circuit
pub const DRV_ERR: RegisterField = RegisterField::new(0x0000_0002, 1, reg::GSTAT);
/// Charge pump undervoltage
pub const UV_CP: RegisterField = RegisterField::new(0x0000_0004, 2, reg::GSTAT);

/// Successful UART write counter
pub const IFCNT: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::IFCNT);
/// UART reply delay
pub const SLAVECONF: RegisterField = RegisterField::new(0x0000_0F00, 8, reg::SLAVECONF);

/// OTP bit to program
pub const OTPBIT: RegisterField = RegisterField::new(0x0000_0007, 0, reg::OTP_PROG);
/// OTP byte to program
pub const OTPBYTE: RegisterField = RegisterField::new(0x0000_0030, 4, reg::OTP_PROG);
/// OTP programming magic, 0xBD
pub const OTPMAGIC: RegisterField = RegisterField::new(0x0000_FF00, 8, reg::OTP_PROG);
/// OTP byte 0
pub const OTP0: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::OTP_READ);
/// OTP byte 1
pub const OTP1: RegisterField = RegisterField::new(0x0000_FF00, 8, reg::OTP_READ);
/// OTP byte 2
pub const OTP2: RegisterField = RegisterField::new(0x00FF_0000, 16, reg::OTP_READ);

/// ENN pin
pub const ENN: RegisterField = RegisterField::new(0x0000_0001, 0, reg::IOIN);
/// MS1 pin
pub const MS1: RegisterField = RegisterField::new(0x0000_0004, 2, reg::IOIN);
/// MS2 pin
pub const MS2: RegisterField = RegisterField::new(0x0000_0008, 3, reg::IOIN);
/// DIAG pin
pub const DIAG: RegisterField = RegisterField::new(0x0000_0010, 4, reg::IOIN);
/// PDN_UART pin
pub const PDN_UART: RegisterField = RegisterField::new(0x0000_0040, 6, reg::IOIN);
/// STEP pin
pub const STEP: RegisterField = RegisterField::new(0x0000_0080, 7, reg::IOIN);
/// Chip variant select
pub const SEL_A: RegisterField = RegisterField::new(0x0000_0100, 8, reg::IOIN);
/// DIR pin
pub const DIR: RegisterField = RegisterField::new(0x0000_0200, 9, reg::IOIN);
/// Chip version, 0x21 on the TMC220x family
pub const VERSION: RegisterField = RegisterField::new(0xFF00_0000, 24, reg::IOIN);

/// Clock frequency trim
pub const FCLKTRIM: RegisterField = RegisterField::new(0x0000_001F, 0, reg::FACTORY_CONF);
/// Overtemperature threshold trim
pub const OTTRIM: RegisterField = RegisterField::new(0x0000_0300, 8, reg::FACTORY_CONF);

/// Standstill current
pub const IHOLD: RegisterField = RegisterField::new(0x0000_001F, 0, reg::IHOLD_IRUN);
/// Run current
pub const IRUN: RegisterField = RegisterField::new(0x0000_1F00, 8, reg::IHOLD_IRUN);
/// Delay before reducing to hold current
pub const IHOLDDELAY: RegisterField = RegisterField::new(0x000F_0000, 16, reg::IHOLD_IRUN);
/// Standstill power down delay
pub const TPOWERDOWN: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::TPOWERDOWN);
/// Measured microstep time
pub const TSTEP: RegisterField = RegisterField::new(0x000F_FFFF, 0, reg::TSTEP);
/// StealthChop upper velocity
pub const TPWMTHRS: RegisterField = RegisterField::new(0x000F_FFFF, 0, reg::TPWMTHRS);
/// Motor velocity in microsteps per time unit, 0 = STEP input
pub const VACTUAL: RegisterField = RegisterField::signed(0x00FF_FFFF, 0, reg::VACTUAL);

/// Microstep counter
pub const MSCNT: RegisterField = RegisterField::new(0x0000_03FF, 0, reg::MSCNT);
/// Actual coil A current
pub const CUR_A: RegisterField = RegisterField::signed(0x0000_01FF, 0, reg::MSCURACT);
/// Actual coil B current
pub const CUR_B: RegisterField = RegisterField::signed(0x01FF_0000, 16, reg::MSCURACT);

/// Off time, 0 disables the driver
pub const TOFF: RegisterField = RegisterField::new(0x0000_000F, 0, reg::CHOPCONF);
/// Hysteresis start
pub const HSTRT: RegisterField = RegisterField::new(0x0000_0070, 4, reg::CHOPCONF);
/// Hysteresis end
pub const HEND: RegisterField = RegisterField::new(0x0000_0780, 7, reg::CHOPCONF);
/// Comparator blank time
pub const TBL: RegisterField = RegisterField::new(0x0001_8000, 15, reg::CHOPCONF);
/// High sensitivity current sensing
pub const VSENSE: RegisterField = RegisterField::new(0x0002_0000, 17, reg::CHOPCONF);
/// Microstep resolution
pub const MRES: RegisterField = RegisterField::new(0x0F00_0000, 24, reg::CHOPCONF);
/// Interpolation to 256 microsteps
pub const INTPOL: RegisterField = RegisterField::new(0x1000_0000, 28, reg::CHOPCONF);
/// Step on both edges
pub const DEDGE: RegisterField = RegisterField::new(0x2000_0000, 29, reg::CHOPCONF);
/// Disable short to ground protection
pub const DISS2G: RegisterField = RegisterField::new(0x4000_0000, 30, reg::CHOPCONF);
/// Disable low side short protection
pub const DISS2VS: RegisterField = RegisterField::new(0x8000_0000, 31, reg::CHOPCONF);

/// Overtemperature prewarning
pub const OTPW: RegisterField = RegisterField::new(0x0000_0001, 0, reg::DRVSTATUS);
/// Overtemperature shutdown
pub const OT: RegisterField = RegisterField::new(0x0000_0002, 1, reg::DRVSTATUS);
/// Short to ground on coil A
pub const S2GA: RegisterField = RegisterField::new(0x0000_0004, 2, reg::DRVSTATUS);
/// Short to ground on coil B
pub const S2GB: RegisterField = RegisterField::new(0x0000_0008, 3, reg::DRVSTATUS);
/// Low side short on coil A
pub const S2VSA: RegisterField = RegisterField::new(0x0000_0010, 4, reg::DRVSTATUS);
/// Low side short on coil B
pub const S2VSB: RegisterField = RegisterField::new(0x0000_0020, 5, reg::DRVSTATUS);
/// Open load on coil A
pub const OLA: RegisterField = RegisterField::new(0x0000_0040, 6, reg::DRVSTATUS);
/// Open load on coil B
pub const OLB: RegisterField = RegisterField::new(0x0000_0080, 7, reg::DRVSTATUS);
/// Temperature above 120 °C
pub const T120: RegisterField = RegisterField::new(0x0000_0100, 8, reg::DRVSTATUS);
/// Temperature above 143 °C
pub const T143: RegisterField = RegisterField::new(0x0000_0200, 9, reg::DRVSTATUS);
/// Temperature above 150 °C
pub const T150: RegisterField = RegisterField::new(0x0000_0400, 10, reg::DRVSTATUS);
/// Temperature above 157 °C
pub const T157: RegisterField = RegisterField::new(0x0000_0800, 11, reg::DRVSTATUS);
/// Actual current scale
pub const CS_ACTUAL: RegisterField = RegisterField::new(0x001F_0000, 16, reg::DRVSTATUS);
/// StealthChop active
pub const STEALTH: RegisterField = RegisterField::new(0x4000_0000, 30, reg::DRVSTATUS);
/// Standstill
pub const STST: RegisterField = RegisterField::new(0x8000_0000, 31, reg::DRVSTATUS);

/// PWM amplitude offset
pub const PWM_OFS: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::PWMCONF);
/// PWM amplitude gradient
pub const PWM_GRAD: RegisterField = RegisterField::new(0x0000_FF00, 8, reg::PWMCONF);
/// PWM frequency
pub const PWM_FREQ: RegisterField = RegisterField::new(0x0003_0000, 16, reg::PWMCONF);
/// Automatic amplitude scaling
pub const PWM_AUTOSCALE: RegisterField = RegisterField::new(0x0004_0000, 18, reg::PWMCONF);
/// Automatic gradient adaptation
pub const PWM_AUTOGRAD: RegisterField = RegisterField::new(0x0008_0000, 19, reg::PWMCONF);
/// Standstill mode at zero hold current
pub const FREEWHEEL: RegisterField = RegisterField::new(0x0030_0000, 20, reg::PWMCONF);
/// Regulation loop gradient
pub const PWM_REG: RegisterField = RegisterField::new(0x0F00_0000, 24, reg::PWMCONF);
/// Amplitude limit when switching to StealthChop
pub const PWM_LIM: RegisterField = RegisterField::new(0xF000_0000, 28, reg::PWMCONF);
/// Actual PWM duty cycle
pub const PWM_SCALE_SUM: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::PWM_SCALE);
/// Automatic amplitude regulation result
pub const PWM_SCALE_AUTO: RegisterField = RegisterField::signed(0x01FF_0000, 16, reg::PWM_SCALE);
/// Automatically determined offset
pub const PWM_OFS_AUTO: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::PWM_AUTO);
/// Automatically determined gradient
pub const PWM_GRAD_AUTO: RegisterField = RegisterField::new(0x00FF_0000, 16, reg::PWM_AUTO);
