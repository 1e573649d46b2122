#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DutyRamp`**: Pure triangle-wave state machine producing the next duty value each tick
//! - **`RampDirection`**: Which way the ramp is currently travelling (`Rising` or `Falling`)
//! - **`PwmOutput`**: Trait to implement for your PWM timer hardware
//! - **`LedChannel`**: Identifier for the three PWM output channels
//! - **`LedBreather`**: Context object owning the ramp, the enable flag and the channel mirrors
//! - **`BreatherCommand`**: Parsed interactive command (`pwminit`, `pwm`, `enable`)
//!
//! Duty cycles are integer step counts out of `PwmOutput::max_duty()`
//! (e.g. 0-1000). The platform provides the periodic cadence by calling
//! [`LedBreather::on_tick`] from its timer interrupt or timer task, exactly
//! once per period.

pub mod breather;
pub mod command;
pub mod output;
pub mod ramp;

pub use breather::LedBreather;
pub use command::{BreatherCommand, CommandError};
pub use output::{CHANNEL_COUNT, LedChannel, PwmOutput};
pub use ramp::{DutyRamp, RampDirection};
