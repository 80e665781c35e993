//! TMC2240 register table and field definitions
//!
//! Register addresses live in [`reg`], field descriptors are top-level constants named
//! after the datasheet fields. [`MAP`] is the table to hand to
//! [`TmcDriver::new`](crate::TmcDriver::new).
//!
//! The microstep table registers (`MSLUT_0` to `MSLUTSTART`) are write-only with a
//! hardware preset, so their shadow entries are seeded from the factory sine table.

use crate::access::{Access, RegisterConstant, RegisterMap};
use crate::field::RegisterField;

/// Register addresses
pub mod reg {
    /// Global configuration
    pub const GCONF: u8 = 0x00;
    /// Global status flags
    pub const GSTAT: u8 = 0x01;
    /// UART write counter
    pub const IFCNT: u8 = 0x02;
    /// UART node configuration
    pub const NODECONF: u8 = 0x03;
    /// Input pin states and version
    pub const IOIN: u8 = 0x04;
    /// Driver configuration
    pub const DRV_CONF: u8 = 0x0A;
    /// Motor current scaling
    pub const GLOBAL_SCALER: u8 = 0x0B;
    /// Run and hold current
    pub const IHOLD_IRUN: u8 = 0x10;
    /// Standstill power down delay
    pub const TPOWERDOWN: u8 = 0x11;
    /// Measured microstep time
    pub const TSTEP: u8 = 0x12;
    /// StealthChop upper velocity
    pub const TPWMTHRS: u8 = 0x13;
    /// CoolStep lower velocity
    pub const TCOOLTHRS: u8 = 0x14;
    /// High velocity threshold
    pub const THIGH: u8 = 0x15;
    /// Direct coil current
    pub const DIRECT_MODE: u8 = 0x2D;
    /// Encoder configuration
    pub const ENCMODE: u8 = 0x38;
    /// Encoder position
    pub const X_ENC: u8 = 0x39;
    /// Encoder constant
    pub const ENC_CONST: u8 = 0x3A;
    /// Encoder status flags
    pub const ENC_STATUS: u8 = 0x3B;
    /// Latched encoder position
    pub const ENC_LATCH: u8 = 0x3C;
    /// Supply voltage and AIN readings
    pub const ADC_VSUPPLY_AIN: u8 = 0x50;
    /// Temperature reading
    pub const ADC_TEMP: u8 = 0x51;
    /// Overtemperature and overvoltage thresholds
    pub const OTW_OV_VTH: u8 = 0x52;
    /// Microstep table entries 0 to 31
    pub const MSLUT_0: u8 = 0x60;
    /// Microstep table entries 32 to 63
    pub const MSLUT_1: u8 = 0x61;
    /// Microstep table entries 64 to 95
    pub const MSLUT_2: u8 = 0x62;
    /// Microstep table entries 96 to 127
    pub const MSLUT_3: u8 = 0x63;
    /// Microstep table entries 128 to 159
    pub const MSLUT_4: u8 = 0x64;
    /// Microstep table entries 160 to 191
    pub const MSLUT_5: u8 = 0x65;
    /// Microstep table entries 192 to 223
    pub const MSLUT_6: u8 = 0x66;
    /// Microstep table entries 224 to 255
    pub const MSLUT_7: u8 = 0x67;
    /// Microstep table segment widths
    pub const MSLUTSEL: u8 = 0x68;
    /// Microstep table start values
    pub const MSLUTSTART: u8 = 0x69;
    /// Microstep counter
    pub const MSCNT: u8 = 0x6A;
    /// Actual coil currents
    pub const MSCURACT: u8 = 0x6B;
    /// Chopper configuration
    pub const CHOPCONF: u8 = 0x6C;
    /// CoolStep and StallGuard2 configuration
    pub const COOLCONF: u8 = 0x6D;
    /// Driver status
    pub const DRV_STATUS: u8 = 0x6F;
    /// StealthChop configuration
    pub const PWMCONF: u8 = 0x70;
    /// StealthChop amplitude scaling
    pub const PWM_SCALE: u8 = 0x71;
    /// StealthChop automatic tuning results
    pub const PWM_AUTO: u8 = 0x72;
    /// StallGuard4 threshold
    pub const SG4_THRS: u8 = 0x74;
    /// StallGuard4 result
    pub const SG4_RESULT: u8 = 0x75;
    /// StallGuard4 per-coil results
    pub const SG4_IND: u8 = 0x76;
}

const MSLUT_TABLE: &[RegisterConstant] = &[
    RegisterConstant { address: reg::MSLUT_0, value: 0xAAAA_B554 },
    RegisterConstant { address: reg::MSLUT_1, value: 0x4A95_54AA },
    RegisterConstant { address: reg::MSLUT_2, value: 0x2449_2929 },
    RegisterConstant { address: reg::MSLUT_3, value: 0x1010_4222 },
    RegisterConstant { address: reg::MSLUT_4, value: 0xFBFF_FFFF },
    RegisterConstant { address: reg::MSLUT_5, value: 0xB5BB_777D },
    RegisterConstant { address: reg::MSLUT_6, value: 0x4929_5556 },
    RegisterConstant { address: reg::MSLUT_7, value: 0x0040_4222 },
    RegisterConstant { address: reg::MSLUTSEL, value: 0xFFFF_8056 },
    RegisterConstant { address: reg::MSLUTSTART, value: 0x00F7_0000 },
];

/// TMC2240 register table
pub const MAP: RegisterMap = RegisterMap::new("TMC2240")
    .register(reg::GCONF, Access::ReadWrite, 0x0000_2108)
    .register(reg::GSTAT, Access::ReadWriteClear, 0)
    .register(reg::IFCNT, Access::Read, 0)
    .register(reg::NODECONF, Access::ReadWrite, 0)
    .register(reg::IOIN, Access::ReadWrite, 0)
    .register(reg::DRV_CONF, Access::ReadWrite, 0x0000_0020)
    .register(reg::GLOBAL_SCALER, Access::ReadWrite, 0)
    .register(reg::IHOLD_IRUN, Access::ReadWrite, 0x0007_0A03)
    .register(reg::TPOWERDOWN, Access::ReadWrite, 0x0000_000A)
    .register(reg::TSTEP, Access::Read, 0)
    .register(reg::TPWMTHRS, Access::ReadWrite, 0)
    .register(reg::TCOOLTHRS, Access::ReadWrite, 0)
    .register(reg::THIGH, Access::ReadWrite, 0)
    .register(reg::DIRECT_MODE, Access::ReadWrite, 0)
    .register(reg::ENCMODE, Access::ReadWrite, 0)
    .register(reg::X_ENC, Access::ReadWrite, 0)
    .register(reg::ENC_CONST, Access::ReadWrite, 0x0001_0000)
    .register(reg::ENC_STATUS, Access::ReadWriteClear, 0)
    .register(reg::ENC_LATCH, Access::Read, 0)
    .register(reg::ADC_VSUPPLY_AIN, Access::Read, 0)
    .register(reg::ADC_TEMP, Access::Read, 0)
    .register(reg::OTW_OV_VTH, Access::ReadWrite, 0x0B92_0F25)
    .preset(reg::MSLUT_0, Access::WritePreset)
    .preset(reg::MSLUT_1, Access::WritePreset)
    .preset(reg::MSLUT_2, Access::WritePreset)
    .preset(reg::MSLUT_3, Access::WritePreset)
    .preset(reg::MSLUT_4, Access::WritePreset)
    .preset(reg::MSLUT_5, Access::WritePreset)
    .preset(reg::MSLUT_6, Access::WritePreset)
    .preset(reg::MSLUT_7, Access::WritePreset)
    .preset(reg::MSLUTSEL, Access::WritePreset)
    .preset(reg::MSLUTSTART, Access::WritePreset)
    .register(reg::MSCNT, Access::Read, 0)
    .register(reg::MSCURACT, Access::Read, 0)
    .register(reg::CHOPCONF, Access::ReadWrite, 0x1441_0153)
    .register(reg::COOLCONF, Access::ReadWrite, 0)
    .register(reg::DRV_STATUS, Access::Read, 0)
    .register(reg::PWMCONF, Access::ReadWrite, 0xC44C_001E)
    .register(reg::PWM_SCALE, Access::Read, 0)
    .register(reg::PWM_AUTO, Access::Read, 0)
    .register(reg::SG4_THRS, Access::ReadWrite, 0)
    .register(reg::SG4_RESULT, Access::Read, 0)
    .register(reg::SG4_IND, Access::Read, 0)
    .constants(MSLUT_TABLE);

// GCONF

/// Faster standstill detection
pub const FAST_STANDSTILL: RegisterField = RegisterField::new(0x0000_0002, 1, reg::GCONF);
/// StealthChop voltage PWM mode
pub const EN_PWM_MODE: RegisterField = RegisterField::new(0x0000_0004, 2, reg::GCONF);
/// Step input filtering in fullstep mode
pub const MULTISTEP_FILT: RegisterField = RegisterField::new(0x0000_0008, 3, reg::GCONF);
/// Invert motor direction
pub const SHAFT: RegisterField = RegisterField::new(0x0000_0010, 4, reg::GCONF);
/// DIAG0 on driver errors
pub const DIAG0_ERROR: RegisterField = RegisterField::new(0x0000_0020, 5, reg::GCONF);
/// DIAG0 on overtemperature prewarning
pub const DIAG0_OTPW: RegisterField = RegisterField::new(0x0000_0040, 6, reg::GCONF);
/// DIAG0 on stall
pub const DIAG0_STALL: RegisterField = RegisterField::new(0x0000_0080, 7, reg::GCONF);
/// DIAG1 on stall
pub const DIAG1_STALL: RegisterField = RegisterField::new(0x0000_0100, 8, reg::GCONF);
/// DIAG1 on index position
pub const DIAG1_INDEX: RegisterField = RegisterField::new(0x0000_0200, 9, reg::GCONF);
/// DIAG0 push-pull output
pub const DIAG0_PUSHPULL: RegisterField = RegisterField::new(0x0000_1000, 12, reg::GCONF);
/// DIAG1 push-pull output
pub const DIAG1_PUSHPULL: RegisterField = RegisterField::new(0x0000_2000, 13, reg::GCONF);
/// Small step input hysteresis
pub const SMALL_HYSTERESIS: RegisterField = RegisterField::new(0x0000_4000, 14, reg::GCONF);
/// Emergency stop through DIAG input
pub const STOP_ENABLE: RegisterField = RegisterField::new(0x0000_8000, 15, reg::GCONF);
/// Direct coil current control
pub const DIRECT_MODE: RegisterField = RegisterField::new(0x0001_0000, 16, reg::GCONF);

// GSTAT

/// Chip was reset since the flag was last cleared
pub const RESET: RegisterField = RegisterField::new(0x0000_0001, 0, reg::GSTAT);
/// Driver shut down on overtemperature or short circuit
pub const DRV_ERR: RegisterField = RegisterField::new(0x0000_0002, 1, reg::GSTAT);
/// Charge pump undervoltage
pub const UV_CP: RegisterField = RegisterField::new(0x0000_0004, 2, reg::GSTAT);
/// Registers were reset by a supply event
pub const REGISTER_RESET: RegisterField = RegisterField::new(0x0000_0008, 3, reg::GSTAT);
/// Motor supply undervoltage lockout
pub const VM_UVLO: RegisterField = RegisterField::new(0x0000_0010, 4, reg::GSTAT);

// IFCNT, NODECONF

/// Successful UART write counter
pub const IFCNT: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::IFCNT);
/// UART node address
pub const NODEADDR: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::NODECONF);
/// UART reply delay
pub const SENDDELAY: RegisterField = RegisterField::new(0x0000_0F00, 8, reg::NODECONF);

// IOIN

/// REFL / STEP pin
pub const REFL_STEP: RegisterField = RegisterField::new(0x0000_0001, 0, reg::IOIN);
/// REFR / DIR pin
pub const REFR_DIR: RegisterField = RegisterField::new(0x0000_0002, 1, reg::IOIN);
/// ENCB / CFG4 pin
pub const ENCB_CFG4: RegisterField = RegisterField::new(0x0000_0004, 2, reg::IOIN);
/// ENCA / CFG5 pin
pub const ENCA_CFG5: RegisterField = RegisterField::new(0x0000_0008, 3, reg::IOIN);
/// DRV_ENN pin
pub const DRV_ENN: RegisterField = RegisterField::new(0x0000_0010, 4, reg::IOIN);
/// ENCN / CFG6 pin
pub const ENCN_CFG6: RegisterField = RegisterField::new(0x0000_0020, 5, reg::IOIN);
/// UART interface selected
pub const UART_EN: RegisterField = RegisterField::new(0x0000_0040, 6, reg::IOIN);
/// Coil A comparator
pub const COMP_A: RegisterField = RegisterField::new(0x0000_0100, 8, reg::IOIN);
/// Coil B comparator
pub const COMP_B: RegisterField = RegisterField::new(0x0000_0200, 9, reg::IOIN);
/// Coil A half bridge comparator
pub const COMP_A1_A2: RegisterField = RegisterField::new(0x0000_0400, 10, reg::IOIN);
/// Coil B half bridge comparator
pub const COMP_B1_B2: RegisterField = RegisterField::new(0x0000_0800, 11, reg::IOIN);
/// Output pin state
pub const OUTPUT: RegisterField = RegisterField::new(0x0000_1000, 12, reg::IOIN);
/// External sense resistor detected
pub const EXT_RES_DET: RegisterField = RegisterField::new(0x0000_2000, 13, reg::IOIN);
/// External clock in use
pub const EXT_CLK: RegisterField = RegisterField::new(0x0000_4000, 14, reg::IOIN);
/// ADC error
pub const ADC_ERR: RegisterField = RegisterField::new(0x0000_8000, 15, reg::IOIN);
/// Silicon revision
pub const SILICON_RV: RegisterField = RegisterField::new(0x0007_0000, 16, reg::IOIN);
/// Chip version, 0x40 on the TMC2240
pub const VERSION: RegisterField = RegisterField::new(0xFF00_0000, 24, reg::IOIN);

// DRV_CONF, GLOBAL_SCALER

/// Full scale current range
pub const CURRENT_RANGE: RegisterField = RegisterField::new(0x0000_0003, 0, reg::DRV_CONF);
/// Output slope control
pub const SLOPE_CONTROL: RegisterField = RegisterField::new(0x0000_0030, 4, reg::DRV_CONF);
/// Global current scaler, 0 = full scale
pub const GLOBAL_SCALER: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::GLOBAL_SCALER);

// IHOLD_IRUN

/// Standstill current
pub const IHOLD: RegisterField = RegisterField::new(0x0000_001F, 0, reg::IHOLD_IRUN);
/// Run current
pub const IRUN: RegisterField = RegisterField::new(0x0000_1F00, 8, reg::IHOLD_IRUN);
/// Delay before reducing to hold current
pub const IHOLDDELAY: RegisterField = RegisterField::new(0x000F_0000, 16, reg::IHOLD_IRUN);
/// Delay before ramping up to run current
pub const IRUNDELAY: RegisterField = RegisterField::new(0x0F00_0000, 24, reg::IHOLD_IRUN);

// Velocity thresholds

/// Standstill power down delay
pub const TPOWERDOWN: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::TPOWERDOWN);
/// Measured microstep time
pub const TSTEP: RegisterField = RegisterField::new(0x000F_FFFF, 0, reg::TSTEP);
/// StealthChop upper velocity
pub const TPWMTHRS: RegisterField = RegisterField::new(0x000F_FFFF, 0, reg::TPWMTHRS);
/// CoolStep lower velocity
pub const TCOOLTHRS: RegisterField = RegisterField::new(0x000F_FFFF, 0, reg::TCOOLTHRS);
/// High velocity threshold
pub const THIGH: RegisterField = RegisterField::new(0x000F_FFFF, 0, reg::THIGH);

// DIRECT_MODE

/// Direct coil A current
pub const DIRECT_COIL_A: RegisterField = RegisterField::signed(0x0000_01FF, 0, reg::DIRECT_MODE);
/// Direct coil B current
pub const DIRECT_COIL_B: RegisterField = RegisterField::signed(0x01FF_0000, 16, reg::DIRECT_MODE);

// Encoder

/// Encoder A channel polarity
pub const POL_A: RegisterField = RegisterField::new(0x0000_0001, 0, reg::ENCMODE);
/// Encoder B channel polarity
pub const POL_B: RegisterField = RegisterField::new(0x0000_0002, 1, reg::ENCMODE);
/// Encoder N channel polarity
pub const POL_N: RegisterField = RegisterField::new(0x0000_0004, 2, reg::ENCMODE);
/// Ignore A and B polarity for N events
pub const IGNORE_AB: RegisterField = RegisterField::new(0x0000_0008, 3, reg::ENCMODE);
/// Latch on every N event
pub const CLR_CONT: RegisterField = RegisterField::new(0x0000_0010, 4, reg::ENCMODE);
/// Latch on the next N event only
pub const CLR_ONCE: RegisterField = RegisterField::new(0x0000_0020, 5, reg::ENCMODE);
/// N event edge selection
pub const POS_NEG_EDGE: RegisterField = RegisterField::new(0x0000_00C0, 6, reg::ENCMODE);
/// Clear encoder position on latch
pub const CLR_ENC_X: RegisterField = RegisterField::new(0x0000_0100, 8, reg::ENCMODE);
/// Also latch the actual position
pub const LATCH_X_ACT: RegisterField = RegisterField::new(0x0000_0200, 9, reg::ENCMODE);
/// Decimal encoder constant
pub const ENC_SEL_DECIMAL: RegisterField = RegisterField::new(0x0000_0400, 10, reg::ENCMODE);
/// Encoder position
pub const X_ENC: RegisterField = RegisterField::signed(0xFFFF_FFFF, 0, reg::X_ENC);
/// Encoder constant
pub const ENC_CONST: RegisterField = RegisterField::new(0xFFFF_FFFF, 0, reg::ENC_CONST);
/// N event detected
pub const N_EVENT: RegisterField = RegisterField::new(0x0000_0001, 0, reg::ENC_STATUS);
/// Encoder deviation warning
pub const DEVIATION_WARN: RegisterField = RegisterField::new(0x0000_0002, 1, reg::ENC_STATUS);
/// Latched encoder position
pub const ENC_LATCH: RegisterField = RegisterField::new(0xFFFF_FFFF, 0, reg::ENC_LATCH);

// ADC

/// Supply voltage reading
pub const ADC_VSUPPLY: RegisterField = RegisterField::new(0x0000_1FFF, 0, reg::ADC_VSUPPLY_AIN);
/// AIN reading
pub const ADC_AIN: RegisterField = RegisterField::new(0x1FFF_0000, 16, reg::ADC_VSUPPLY_AIN);
/// Temperature reading
pub const ADC_TEMP: RegisterField = RegisterField::new(0x0000_1FFF, 0, reg::ADC_TEMP);
/// Overvoltage threshold
pub const OVERVOLTAGE_VTH: RegisterField = RegisterField::new(0x0000_1FFF, 0, reg::OTW_OV_VTH);
/// Overtemperature prewarning threshold
pub const OVERTEMPPREWARNING_VTH: RegisterField =
    RegisterField::new(0x1FFF_0000, 16, reg::OTW_OV_VTH);

// Microstep table

/// Segment 0 width
pub const W0: RegisterField = RegisterField::new(0x0000_0003, 0, reg::MSLUTSEL);
/// Segment 1 width
pub const W1: RegisterField = RegisterField::new(0x0000_000C, 2, reg::MSLUTSEL);
/// Segment 2 width
pub const W2: RegisterField = RegisterField::new(0x0000_0030, 4, reg::MSLUTSEL);
/// Segment 3 width
pub const W3: RegisterField = RegisterField::new(0x0000_00C0, 6, reg::MSLUTSEL);
/// Segment 1 start
pub const X1: RegisterField = RegisterField::new(0x0000_FF00, 8, reg::MSLUTSEL);
/// Segment 2 start
pub const X2: RegisterField = RegisterField::new(0x00FF_0000, 16, reg::MSLUTSEL);
/// Segment 3 start
pub const X3: RegisterField = RegisterField::new(0xFF00_0000, 24, reg::MSLUTSEL);
/// Sine table start value
pub const START_SIN: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::MSLUTSTART);
/// Cosine table start value
pub const START_SIN90: RegisterField = RegisterField::new(0x00FF_0000, 16, reg::MSLUTSTART);
/// Cosine table offset
pub const OFFSET_SIN90: RegisterField = RegisterField::signed(0xFF00_0000, 24, reg::MSLUTSTART);
/// Microstep counter
pub const MSCNT: RegisterField = RegisterField::new(0x0000_03FF, 0, reg::MSCNT);
/// Actual coil A current
pub const CUR_A: RegisterField = RegisterField::signed(0x0000_01FF, 0, reg::MSCURACT);
/// Actual coil B current
pub const CUR_B: RegisterField = RegisterField::signed(0x01FF_0000, 16, reg::MSCURACT);

// CHOPCONF

/// Off time, 0 disables the driver
pub const TOFF: RegisterField = RegisterField::new(0x0000_000F, 0, reg::CHOPCONF);
/// Hysteresis start, or fast decay time bits 0..2
pub const HSTRT_TFD210: RegisterField = RegisterField::new(0x0000_0070, 4, reg::CHOPCONF);
/// Hysteresis end, or sine wave offset
pub const HEND_OFFSET: RegisterField = RegisterField::new(0x0000_0780, 7, reg::CHOPCONF);
/// Fast decay time bit 3
pub const FD3: RegisterField = RegisterField::new(0x0000_0800, 11, reg::CHOPCONF);
/// Disable current comparator for fast decay termination
pub const DISFDCC: RegisterField = RegisterField::new(0x0000_1000, 12, reg::CHOPCONF);
/// Chopper mode
pub const CHM: RegisterField = RegisterField::new(0x0000_4000, 14, reg::CHOPCONF);
/// Comparator blank time
pub const TBL: RegisterField = RegisterField::new(0x0001_8000, 15, reg::CHOPCONF);
/// Fullstep switching at high velocity
pub const VHIGHFS: RegisterField = RegisterField::new(0x0004_0000, 18, reg::CHOPCONF);
/// Chopper mode switching at high velocity
pub const VHIGHCHM: RegisterField = RegisterField::new(0x0008_0000, 19, reg::CHOPCONF);
/// Passive fast decay time
pub const TPFD: RegisterField = RegisterField::new(0x00F0_0000, 20, reg::CHOPCONF);
/// Microstep resolution
pub const MRES: RegisterField = RegisterField::new(0x0F00_0000, 24, reg::CHOPCONF);
/// Interpolation to 256 microsteps
pub const INTPOL: RegisterField = RegisterField::new(0x1000_0000, 28, reg::CHOPCONF);
/// Step on both edges
pub const DEDGE: RegisterField = RegisterField::new(0x2000_0000, 29, reg::CHOPCONF);
/// Disable short to ground protection
pub const DISS2G: RegisterField = RegisterField::new(0x4000_0000, 30, reg::CHOPCONF);
/// Disable short to supply protection
pub const DISS2VS: RegisterField = RegisterField::new(0x8000_0000, 31, reg::CHOPCONF);

// COOLCONF

/// CoolStep lower threshold
pub const SEMIN: RegisterField = RegisterField::new(0x0000_000F, 0, reg::COOLCONF);
/// Current increment step
pub const SEUP: RegisterField = RegisterField::new(0x0000_0060, 5, reg::COOLCONF);
/// CoolStep upper threshold
pub const SEMAX: RegisterField = RegisterField::new(0x0000_0F00, 8, reg::COOLCONF);
/// Current decrement speed
pub const SEDN: RegisterField = RegisterField::new(0x0000_6000, 13, reg::COOLCONF);
/// Minimum CoolStep current
pub const SEIMIN: RegisterField = RegisterField::new(0x0000_8000, 15, reg::COOLCONF);
/// StallGuard2 threshold
pub const SGT: RegisterField = RegisterField::signed(0x007F_0000, 16, reg::COOLCONF);
/// StallGuard2 filter
pub const SFILT: RegisterField = RegisterField::new(0x0100_0000, 24, reg::COOLCONF);

// DRV_STATUS

/// StallGuard result
pub const SG_RESULT: RegisterField = RegisterField::new(0x0000_03FF, 0, reg::DRV_STATUS);
/// Short to supply on coil A
pub const S2VSA: RegisterField = RegisterField::new(0x0000_1000, 12, reg::DRV_STATUS);
/// Short to supply on coil B
pub const S2VSB: RegisterField = RegisterField::new(0x0000_2000, 13, reg::DRV_STATUS);
/// StealthChop active
pub const STEALTH: RegisterField = RegisterField::new(0x0000_4000, 14, reg::DRV_STATUS);
/// Fullstep active
pub const FSACTIVE: RegisterField = RegisterField::new(0x0000_8000, 15, reg::DRV_STATUS);
/// Actual current scale
pub const CS_ACTUAL: RegisterField = RegisterField::new(0x001F_0000, 16, reg::DRV_STATUS);
/// Stall detected
pub const STALLGUARD: RegisterField = RegisterField::new(0x0100_0000, 24, reg::DRV_STATUS);
/// Overtemperature shutdown
pub const OT: RegisterField = RegisterField::new(0x0200_0000, 25, reg::DRV_STATUS);
/// Overtemperature prewarning
pub const OTPW: RegisterField = RegisterField::new(0x0400_0000, 26, reg::DRV_STATUS);
/// Short to ground on coil A
pub const S2GA: RegisterField = RegisterField::new(0x0800_0000, 27, reg::DRV_STATUS);
/// Short to ground on coil B
pub const S2GB: RegisterField = RegisterField::new(0x1000_0000, 28, reg::DRV_STATUS);
/// Open load on coil A
pub const OLA: RegisterField = RegisterField::new(0x2000_0000, 29, reg::DRV_STATUS);
/// Open load on coil B
pub const OLB: RegisterField = RegisterField::new(0x4000_0000, 30, reg::DRV_STATUS);
/// Standstill
pub const STST: RegisterField = RegisterField::new(0x8000_0000, 31, reg::DRV_STATUS);

// PWMCONF

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
/// StallGuard measurement in StealthChop
pub const PWM_MEAS_SD_ENABLE: RegisterField = RegisterField::new(0x0040_0000, 22, reg::PWMCONF);
/// No regulation at standstill
pub const PWM_DIS_REG_STST: RegisterField = RegisterField::new(0x0080_0000, 23, reg::PWMCONF);
/// Regulation loop gradient
pub const PWM_REG: RegisterField = RegisterField::new(0x0F00_0000, 24, reg::PWMCONF);
/// Amplitude limit when switching to StealthChop
pub const PWM_LIM: RegisterField = RegisterField::new(0xF000_0000, 28, reg::PWMCONF);
/// Actual PWM duty cycle
pub const PWM_SCALE_SUM: RegisterField = RegisterField::new(0x0000_03FF, 0, reg::PWM_SCALE);
/// Automatic amplitude regulation result
pub const PWM_SCALE_AUTO: RegisterField = RegisterField::signed(0x01FF_0000, 16, reg::PWM_SCALE);
/// Automatically determined offset
pub const PWM_OFS_AUTO: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::PWM_AUTO);
/// Automatically determined gradient
pub const PWM_GRAD_AUTO: RegisterField = RegisterField::new(0x00FF_0000, 16, reg::PWM_AUTO);

// StallGuard4

/// StallGuard4 threshold
pub const SG4_THRS: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::SG4_THRS);
/// StallGuard4 filter
pub const SG4_FILT_EN: RegisterField = RegisterField::new(0x0000_0100, 8, reg::SG4_THRS);
/// StallGuard angle offset compensation
pub const SG_ANGLE_OFFSET: RegisterField = RegisterField::new(0x0000_0200, 9, reg::SG4_THRS);
/// StallGuard4 result
pub const SG4_RESULT: RegisterField = RegisterField::new(0x0000_03FF, 0, reg::SG4_RESULT);
/// StallGuard4 result, coil A positive half wave
pub const SG4_IND_0: RegisterField = RegisterField::new(0x0000_00FF, 0, reg::SG4_IND);
/// StallGuard4 result, coil A negative half wave
pub const SG4_IND_1: RegisterField = RegisterField::new(0x0000_FF00, 8, reg::SG4_IND);
/// StallGuard4 result, coil B positive half wave
pub const SG4_IND_2: RegisterField = RegisterField::new(0x00FF_0000, 16, reg::SG4_IND);
/// StallGuard4 result, coil B negative half wave
pub const SG4_IND_3: RegisterField = RegisterField::new(0xFF00_0000, 24, reg::SG4_IND);
