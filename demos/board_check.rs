// Board check: verify the motion board answers and report its firmware.
//
// The only write this performs is the motor-zeroing that opening a session
// always does; servos are left untouched.
//
// Usage: cargo run --example board_check -- [i2c-dev]
// Example: cargo run --example board_check -- /dev/i2c-1

use linux_embedded_hal::I2cdev;
use motionkit::{DEFAULT_ADDRESS, I2cTransport, MotionKit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("debug".parse().unwrap()),
        )
        .init();

    let dev = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/i2c-1".to_string());

    println!("Opening {} (device address 0x{:02X})...", dev, DEFAULT_ADDRESS);
    let i2c = I2cdev::new(&dev)?;

    let mut kit = match MotionKit::new(I2cTransport::new(i2c, DEFAULT_ADDRESS)) {
        Ok(kit) => {
            println!("  ✓ Board found");
            kit
        }
        Err(e) => {
            println!("  ✗ {}", e);
            println!();
            println!("Troubleshooting:");
            println!("  - Check the board is wired to this bus and powered");
            println!("  - Run `i2cdetect` and look for address 0x35");
            return Err(e.into());
        }
    };

    println!("  Identity: 0x{:02X}", kit.who_am_i());
    println!("  Firmware: {}", kit.fw_version()?);
    println!();
    println!("Board looks healthy. Try: cargo run --example servo_sweep -- {}", dev);

    Ok(())
}
