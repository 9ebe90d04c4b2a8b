// Driver for the I2C motion-control expansion board
//
// Provides:
// - Register-level bus transport (little-endian words, two's-complement reads)
// - Device session with a one-time identity check
// - Tracked servo positions and interpolated degree-by-degree sweeps

pub mod driver;
pub mod error;
pub mod interp;
pub mod registers;
pub mod transport;
pub mod transport_i2c;

pub use driver::{DEFAULT_SWEEP_SPEED, MotionKit};
pub use error::MotionKitError;
pub use registers::{DEFAULT_ADDRESS, Motor, Register, SERVO_CHANNELS, Servo};
pub use transport::{BusTransport, TransportError};
pub use transport_i2c::I2cTransport;
