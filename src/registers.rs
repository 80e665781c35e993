//! Typed register block for the TMC2240
//!
//! Generated with `device-driver` from the datasheet register map. The block works on
//! top of [`crate::TmcDriver`] through a [`crate::ChipInterface`], so every access
//! follows the driver's cache rules: `modify` reads the current word from the chip for
//! readable registers and from the shadow cache for write-only ones, and the written
//! word is shadowed for `restore`.
//!
//! Only the configuration and status registers used in day-to-day operation are
//! listed here; every field is also available as a [`crate::RegisterField`] constant in
//! [`crate::tmc2240`].
//!
//! ```ignore
//! use tmc_registers::registers::Tmc2240;
//!
//! let mut regs = Tmc2240::new(driver.chip(0));
//! regs.ihold_irun().modify(|w| {
//!     w.set_irun(16);
//!     w.set_ihold(4);
//! })?;
//! ```

device_driver::create_device!(
    device_name: Tmc2240,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// GCONF - Global configuration (0x00)
        register Gconf {
            const ADDRESS = 0x00;
            const SIZE_BITS = 32;

            /// Faster standstill detection
            fast_standstill: bool = 1,
            /// StealthChop voltage PWM mode
            en_pwm_mode: bool = 2,
            /// Step input filtering in fullstep mode
            multistep_filt: bool = 3,
            /// Invert motor direction
            shaft: bool = 4,
            /// Small comparator hysteresis for step inputs
            small_hysteresis: bool = 14,
            /// Emergency stop via DIAG input
            stop_enable: bool = 15,
            /// Direct coil current control
            direct_mode: bool = 16,
        },

        /// GSTAT - Global status flags, write 1 to clear (0x01)
        register Gstat {
            const ADDRESS = 0x01;
            const SIZE_BITS = 32;

            /// The chip has been reset since the flag was cleared
            reset: bool = 0,
            /// Driver shut down by overtemperature or short circuit
            drv_err: bool = 1,
            /// Charge pump undervoltage
            uv_cp: bool = 2,
            /// A register has been reset by a supply event
            register_reset: bool = 3,
            /// Motor supply undervoltage lockout
            vm_uvlo: bool = 4,
        },

        /// IFCNT - Successful UART write counter (0x02)
        register Ifcnt {
            const ADDRESS = 0x02;
            const SIZE_BITS = 32;

            /// Counter, wraps at 255
            ifcnt: uint = 0..8,
        },

        /// NODECONF - UART node address and send delay (0x03)
        register Nodeconf {
            const ADDRESS = 0x03;
            const SIZE_BITS = 32;

            /// Node address
            nodeaddr: uint = 0..8,
            /// Reply send delay in bit times
            senddelay: uint = 8..12,
        },

        /// DRV_CONF - Driver configuration (0x0A)
        register DrvConf {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 32;

            /// Full scale current range
            current_range: uint = 0..2,
            /// Output slope control
            slope_control: uint = 4..6,
        },

        /// GLOBAL_SCALER - Motor current scaling (0x0B)
        register GlobalScaler {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 32;

            /// Scaler for both coils, 0 = full scale
            global_scaler: uint = 0..8,
        },

        /// IHOLD_IRUN - Driver current control (0x10)
        register IholdIrun {
            const ADDRESS = 0x10;
            const SIZE_BITS = 32;

            /// Standstill current
            ihold: uint = 0..5,
            /// Motor run current
            irun: uint = 8..13,
            /// Power down delay after standstill
            iholddelay: uint = 16..20,
            /// Current ramp-up delay
            irundelay: uint = 24..28,
        },

        /// TPOWERDOWN - Delay before power down (0x11)
        register Tpowerdown {
            const ADDRESS = 0x11;
            const SIZE_BITS = 32;

            /// Delay in multiples of 2^18 clocks
            tpowerdown: uint = 0..8,
        },

        /// TSTEP - Measured time between microsteps (0x12)
        register Tstep {
            const ADDRESS = 0x12;
            const SIZE_BITS = 32;

            /// Time in clock cycles
            tstep: uint = 0..20,
        },

        /// TPWMTHRS - Upper velocity for StealthChop (0x13)
        register Tpwmthrs {
            const ADDRESS = 0x13;
            const SIZE_BITS = 32;

            /// Threshold in TSTEP units
            tpwmthrs: uint = 0..20,
        },

        /// TCOOLTHRS - Lower velocity for CoolStep and StallGuard (0x14)
        register Tcoolthrs {
            const ADDRESS = 0x14;
            const SIZE_BITS = 32;

            /// Threshold in TSTEP units
            tcoolthrs: uint = 0..20,
        },

        /// THIGH - Velocity threshold for high velocity mode (0x15)
        register Thigh {
            const ADDRESS = 0x15;
            const SIZE_BITS = 32;

            /// Threshold in TSTEP units
            thigh: uint = 0..20,
        },

        /// CHOPCONF - Chopper configuration (0x6C)
        register Chopconf {
            const ADDRESS = 0x6C;
            const SIZE_BITS = 32;

            /// Off time, 0 disables the driver
            toff: uint = 0..4,
            /// Hysteresis start
            hstrt: uint = 4..7,
            /// Hysteresis end
            hend: uint = 7..11,
            /// Fast decay mode
            fd: bool = 11,
            /// Disable current comparator for fast decay termination
            disfdcc: bool = 12,
            /// Chopper mode
            chm: bool = 14,
            /// Comparator blank time
            tbl: uint = 15..17,
            /// Fullstep switching at high velocity
            vhighfs: bool = 18,
            /// Chopper mode switching at high velocity
            vhighchm: bool = 19,
            /// Passive fast decay time
            tpfd: uint = 20..24,
            /// Microstep resolution
            mres: uint = 24..28,
            /// Interpolation to 256 microsteps
            intpol: bool = 28,
            /// Step on both edges
            dedge: bool = 29,
            /// Disable short to ground protection
            diss_two_g: bool = 30,
            /// Disable short to supply protection
            diss_two_vs: bool = 31,
        },

        /// DRV_STATUS - Driver status flags (0x6F)
        register DrvStatus {
            const ADDRESS = 0x6F;
            const SIZE_BITS = 32;

            /// StallGuard result
            sg_result: uint = 0..10,
            /// StealthChop active
            stealth: bool = 14,
            /// Fullstep active
            fsactive: bool = 15,
            /// Actual motor current scale
            cs_actual: uint = 16..21,
            /// Stall detected
            stallguard: bool = 24,
            /// Overtemperature shutdown
            ot: bool = 25,
            /// Overtemperature prewarning
            otpw: bool = 26,
            /// Open load on coil A
            ola: bool = 29,
            /// Open load on coil B
            olb: bool = 30,
            /// Standstill
            stst: bool = 31,
        },

        /// PWMCONF - StealthChop PWM configuration (0x70)
        register Pwmconf {
            const ADDRESS = 0x70;
            const SIZE_BITS = 32;

            /// User defined PWM amplitude offset
            pwm_ofs: uint = 0..8,
            /// User defined PWM amplitude gradient
            pwm_grad: uint = 8..16,
            /// PWM frequency selection
            pwm_freq: uint = 16..18,
            /// Automatic amplitude scaling
            pwm_autoscale: bool = 18,
            /// Automatic gradient adaptation
            pwm_autograd: bool = 19,
            /// Standstill mode when the hold current is 0
            freewheel: uint = 20..22,
            /// Enable measurement of the StallGuard result in StealthChop
            pwm_meas_sd_enable: bool = 22,
            /// Disable regulation at standstill
            pwm_dis_reg_stst: bool = 23,
            /// Regulation loop gradient
            pwm_reg: uint = 24..28,
            /// Amplitude limit for switching to StealthChop
            pwm_lim: uint = 28..32,
        }
    }
);

