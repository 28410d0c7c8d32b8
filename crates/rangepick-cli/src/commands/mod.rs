pub mod parse;
pub mod presets;
pub mod range;
pub mod simulate;

use rangepick_core::{Clock, DateValue, FixedClock, SystemClock};

/// A clock pinned to `--today`, or to the system date when it is absent.
pub fn pinned_clock(today: Option<&str>) -> Result<FixedClock, Box<dyn std::error::Error>> {
    match today {
        Some(raw) => DateValue::parse(raw)
            .day()
            .map(FixedClock)
            .ok_or_else(|| format!("invalid --today value: {raw}").into()),
        None => Ok(FixedClock(SystemClock.today())),
    }
}
