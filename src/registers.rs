// Register map for the motion expansion board.
//
// The board exposes a flat byte-addressed register file over I2C.
// Multi-byte registers are little-endian.

/// Factory I2C address of the board; the `WHO_AM_I` register reports the same
/// value on a healthy board.
pub const DEFAULT_ADDRESS: u8 = 0x35;

/// Register addresses
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    MotorIndex = 0, // 2 bytes, written together with MotorSpeed
    MotorSpeed = 2, // 2 bytes, speed x10
    MotorBrake = 4, // 1 byte, motor selector
    Servo1 = 6,     // 2 bytes per channel, angle in degrees
    Servo2 = 8,
    Servo3 = 10,
    Servo4 = 12,

    // Read-only
    FwVersionMinor = 16,
    FwVersionMajor = 17,
    WhoAmI = 18,
}

/// Motor selector for speed/brake commands
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motor {
    M1 = 1,
    M2 = 2,
    All = 3,
}

/// Servo output channels
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Servo {
    S1 = 0,
    S2 = 1,
    S3 = 2,
    S4 = 3,
}

/// All servo channels, in register order
pub const SERVO_CHANNELS: [Servo; 4] = [Servo::S1, Servo::S2, Servo::S3, Servo::S4];

impl Servo {
    /// Angle register backing this channel
    pub fn register(self) -> Register {
        match self {
            Servo::S1 => Register::Servo1,
            Servo::S2 => Register::Servo2,
            Servo::S3 => Register::Servo3,
            Servo::S4 => Register::Servo4,
        }
    }

    /// Slot in the per-channel position table
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn servo_registers_are_two_bytes_apart() {
        let offsets: Vec<u8> = SERVO_CHANNELS.iter().map(|s| s.register() as u8).collect();
        assert_eq!(offsets, vec![6, 8, 10, 12]);
    }

    #[test]
    fn motor_selector_values() {
        assert_eq!(Motor::M1 as u8, 1);
        assert_eq!(Motor::M2 as u8, 2);
        assert_eq!(Motor::All as u8, 3);
    }
}
