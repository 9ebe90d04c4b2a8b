// Servo sweep: step-by-step hardware test that MOVES the outputs.
//
// Run board_check first to verify the board responds.
//
// Usage: cargo run --example servo_sweep -- [i2c-dev]
// Example: cargo run --example servo_sweep -- /dev/i2c-1

use std::io::{self, Write};
use std::thread::sleep;
use std::time::Duration;

use linux_embedded_hal::I2cdev;
use motionkit::{DEFAULT_ADDRESS, I2cTransport, MotionKit, Motor, Servo};

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().eq_ignore_ascii_case("y")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let dev = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/i2c-1".to_string());

    println!("⚠  This test moves servo S1 and pulses motor M1.");
    println!("⚠  Disconnect anything attached to the outputs that must not move.");
    println!();

    if !confirm("Proceed?") {
        println!("Aborted.");
        return Ok(());
    }

    let i2c = I2cdev::new(&dev)?;
    let mut kit = MotionKit::new(I2cTransport::new(i2c, DEFAULT_ADDRESS))?;
    println!("✓ Connected, firmware {}", kit.fw_version()?);
    println!();

    println!("Step 1: servo S1 full sweep");
    println!("  Baseline to 0...");
    kit.set_servo_angle(Servo::S1, 0)?;
    sleep(Duration::from_millis(500));

    println!("  Sweeping 0 -> 90 at default speed...");
    kit.set_servo_position(Servo::S1, 90)?;
    println!("  Tracked angle: {:?}", kit.servo_angle(Servo::S1));

    println!("  Nudging back -30 degrees...");
    kit.move_servo_position(Servo::S1, -30)?;
    sleep(Duration::from_millis(500));
    println!("  Tracked angle: {:?}", kit.servo_angle(Servo::S1));
    println!();

    println!("Step 2: motor M1 slow pulse");
    if confirm("Spin M1 at 20% for one second?") {
        kit.set_motors(Motor::M1, 20)?;
        sleep(Duration::from_secs(1));
        kit.brake(Motor::M1)?;
        println!("  ✓ Braked");
    }

    println!();
    println!("Stopping all motors...");
    kit.stop(Motor::All)?;
    println!("Done.");

    Ok(())
}
