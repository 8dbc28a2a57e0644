//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements    | Connects to                      |
//! |-------------|---------------|----------------------------------|
//! | `hardware`  | HardwarePort  | any `embedded-hal` pins + DHT11  |
//! | `rpi`       | (constructor) | Raspberry Pi GPIO via `rppal`    |
//! | `sim`       | HardwarePort  | in-memory board for host runs    |
//! | `terminal`  | DisplaySink   | ANSI terminal, stdin commands    |
//! | `log_sink`  | EventSink     | `log` facade                     |
//! | `time`      | Clock         | `std::time::Instant`             |

pub mod hardware;
pub mod log_sink;
#[cfg(feature = "rpi")]
pub mod rpi;
pub mod sim;
pub mod terminal;
pub mod time;
