//! Back-and-forth sweep on a stepper attached to an LV8548 board.
//!
//! Run with:
//!   cargo run --example sweep -- /dev/ttyUSB0
//!
//! Without an argument the frames go to a capture file in the temp dir,
//! which can be inspected with `xxd`.

use std::time::Duration;

use lv8548step::driver::open;
use lv8548step::frame::{Direction, Excitation, Rotation, StepAngle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let device: std::path::PathBuf = match std::env::args().nth(1) {
        Some(path) => path.into(),
        None => {
            let path = std::env::temp_dir().join("lv8548step-sweep.bin");
            std::fs::write(&path, b"")?;
            path
        }
    };

    let mut driver = open(&device)?;
    driver.init()?;
    driver.set_step_angle(StepAngle::Deg1_8)?;

    for direction in [Direction::ClockWise, Direction::CounterClockWise] {
        driver.rotate_by_degrees(Rotation::new(400, 180, direction, Excitation::HalfStep))?;
        std::thread::sleep(Duration::from_secs(1));
    }

    driver.hold()?;
    std::thread::sleep(Duration::from_millis(500));
    driver.free()?;

    eprintln!(
        "sent {} frames to {}",
        driver.frames_sent(),
        device.display()
    );
    Ok(())
}
