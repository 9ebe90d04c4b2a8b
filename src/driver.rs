// High-level session for the motion expansion board.
//
// Owns the bus transport and the per-channel servo position table; every
// motor and servo command goes through here.

use std::thread::sleep;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::MotionKitError;
use crate::interp::step_delay_ms;
use crate::registers::{DEFAULT_ADDRESS, Motor, Register, Servo};
use crate::transport::BusTransport;

/// Sweep speed in percent used by `set_servo_position`.
pub const DEFAULT_SWEEP_SPEED: u8 = 70;

/// Device session. Single-owner and fully synchronous: every command blocks
/// until its bus transaction completes or fails.
#[derive(Debug)]
pub struct MotionKit<T> {
    bus: T,
    who_am_i: u8,
    servo_pos: [Option<u16>; 4],
}

impl<T: BusTransport> MotionKit<T> {
    /// Open a session on `bus`, verifying the board identity first.
    ///
    /// On success all motor outputs are zeroed and the servo position table
    /// starts empty. A transport fault while probing `WHO_AM_I` is treated as
    /// identity 0, so a dead bus reports [`MotionKitError::DeviceNotFound`]
    /// rather than a transport error.
    pub fn new(mut bus: T) -> Result<Self, MotionKitError> {
        let who_am_i = bus.read_u8(Register::WhoAmI as u8).unwrap_or(0);
        if who_am_i != DEFAULT_ADDRESS {
            return Err(MotionKitError::DeviceNotFound {
                expected: DEFAULT_ADDRESS,
                scanned: who_am_i,
            });
        }

        let mut kit = Self {
            bus,
            who_am_i,
            servo_pos: [None; 4],
        };
        kit.set_motors(Motor::All, 0)?;
        info!("motion board ready, identity 0x{:02X}", kit.who_am_i);
        Ok(kit)
    }

    /// Identity byte captured when the session was opened.
    pub fn who_am_i(&self) -> u8 {
        self.who_am_i
    }

    /// Firmware revision as "major.minor".
    pub fn fw_version(&mut self) -> Result<String, MotionKitError> {
        let minor = self.bus.read_u8(Register::FwVersionMinor as u8)?;
        let major = self.bus.read_u8(Register::FwVersionMajor as u8)?;
        Ok(format!("{major}.{minor}"))
    }

    /// Set `motor` to `speed`. The value is scaled x10 on the wire and sent
    /// unclamped; what out-of-range speeds do is up to the firmware.
    pub fn set_motors(&mut self, motor: Motor, speed: i16) -> Result<(), MotionKitError> {
        debug!("set motor {:?} speed {}", motor, speed);
        let words = [motor as u16, speed.wrapping_mul(10) as u16];
        self.bus.write_u16s(Register::MotorIndex as u8, &words)?;
        Ok(())
    }

    /// Let `motor` coast to a stop.
    pub fn stop(&mut self, motor: Motor) -> Result<(), MotionKitError> {
        self.set_motors(motor, 0)
    }

    /// Actively brake `motor`.
    pub fn brake(&mut self, motor: Motor) -> Result<(), MotionKitError> {
        debug!("brake {:?}", motor);
        self.bus.write_u8(Register::MotorBrake as u8, motor as u8)?;
        Ok(())
    }

    /// Command `channel` straight to `angle` (degrees) and record it in the
    /// position table. The angle goes out unclamped as a 16-bit word; this is
    /// the single point of truth for the tracked position.
    pub fn set_servo_angle(&mut self, channel: Servo, angle: u16) -> Result<(), MotionKitError> {
        self.bus.write_u16(channel.register() as u8, angle)?;
        self.servo_pos[channel.index()] = Some(angle);
        Ok(())
    }

    /// Last commanded angle for `channel`, or `None` if it has not been
    /// positioned since the session opened.
    pub fn servo_angle(&self, channel: Servo) -> Option<u16> {
        self.servo_pos[channel.index()]
    }

    /// Sweep `channel` to `target` at the default speed.
    pub fn set_servo_position(&mut self, channel: Servo, target: u16) -> Result<(), MotionKitError> {
        self.set_servo_position_with_speed(channel, target, DEFAULT_SWEEP_SPEED)
    }

    /// Sweep `channel` one degree at a time toward `target`, pausing between
    /// steps according to `speed_percent` (clamped to 0..=100; 100 sweeps
    /// without pausing). Blocks the calling thread for the whole sweep and
    /// aborts on the first transport failure.
    ///
    /// A channel that has never been positioned is first driven to 0 to give
    /// the sweep a known starting point. The stepping range is half-open: the
    /// tracked angle ends one degree short of `target`, matching the board's
    /// original tooling.
    pub fn set_servo_position_with_speed(
        &mut self,
        channel: Servo,
        target: u16,
        speed_percent: u8,
    ) -> Result<(), MotionKitError> {
        let delay = Duration::from_millis(step_delay_ms(speed_percent));

        let current = match self.servo_pos[channel.index()] {
            Some(angle) => angle,
            None => {
                self.set_servo_angle(channel, 0)?;
                0
            }
        };

        debug!(
            "sweep {:?}: {} -> {} at {:?}/degree",
            channel, current, target, delay
        );

        if target < current {
            let mut angle = current;
            while angle > target {
                self.set_servo_angle(channel, angle)?;
                sleep(delay);
                angle -= 1;
            }
        } else {
            for angle in current..target {
                self.set_servo_angle(channel, angle)?;
                sleep(delay);
            }
        }
        Ok(())
    }

    /// Nudge `channel` by `delta` degrees relative to its tracked position
    /// (untracked channels count as 0), clamped to 0..=180. One immediate
    /// write, no interpolation.
    pub fn move_servo_position(&mut self, channel: Servo, delta: i32) -> Result<(), MotionKitError> {
        let current = self.servo_pos[channel.index()].unwrap_or(0) as i32;
        let next = (current + delta).clamp(0, 180) as u16;
        self.set_servo_angle(channel, next)
    }

    /// Tear down the session and hand the transport back.
    pub fn release(self) -> T {
        self.bus
    }
}
