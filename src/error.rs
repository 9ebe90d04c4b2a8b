use thiserror::Error;

use crate::transport::TransportError;

/// Driver-level failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MotionKitError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The identity register did not report the expected board. A bus fault
    /// during the identity probe is folded into this case too (scanned = 0),
    /// keeping parity with the board's original tooling.
    #[error("motion board not found: expected 0x{expected:02X}, scanned 0x{scanned:02X}")]
    DeviceNotFound { expected: u8, scanned: u8 },
}
