pub mod r#trait;
pub use r#trait::Clock;

pub mod system_clock;
pub use system_clock::SystemClock;

pub mod manual_clock;
pub use manual_clock::ManualClock;
