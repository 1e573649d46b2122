//! Hardware abstraction for the PWM timer collaborator.
//!
//! The library never touches peripherals directly. Implement [`PwmOutput`]
//! for your timer hardware and the breather drives it through duty-register
//! writes and generation gating.

/// Number of PWM output channels driven by the breather.
pub const CHANNEL_COUNT: usize = 3;

/// Identifies one of the three PWM output channels.
///
/// Channel 1 is the breathing channel; channels 2 and 3 stay under direct
/// command control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    Ch1,
    Ch2,
    Ch3,
}

impl LedChannel {
    /// All channels, in numbering order.
    pub const ALL: [LedChannel; CHANNEL_COUNT] =
        [LedChannel::Ch1, LedChannel::Ch2, LedChannel::Ch3];

    /// Maps a command-surface channel number (1-3) to a channel.
    ///
    /// Returns `None` for any other number, including the stop-all
    /// sentinel `0`; the dispatcher handles that before calling here.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(LedChannel::Ch1),
            2 => Some(LedChannel::Ch2),
            3 => Some(LedChannel::Ch3),
            _ => None,
        }
    }

    /// Zero-based index for array storage.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based channel number as used on the command surface.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

/// Trait for abstracting the PWM timer hardware.
///
/// Implement this for your timer peripheral (hardware PWM timer, LEDC
/// block, simulated timer for tests, ...). The implementation owns pin
/// muxing, clock enabling and interrupt registration; the breather only
/// sees duty registers, generation gating and the periodic-tick signal.
pub trait PwmOutput {
    /// Failure code reported by the hardware setup call.
    type Error: core::fmt::Debug;

    /// Brings up the timer/GPIO hardware and arms the periodic tick.
    ///
    /// Calling this twice is target-defined with respect to register
    /// re-initialization; the breather makes no idempotence guarantee.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Duty resolution: the number of counts in one PWM period (e.g. 1000).
    fn max_duty(&self) -> u16;

    /// Latches `duty` into the channel's duty register, effective
    /// immediately.
    ///
    /// Must not fail; handle hardware errors internally. A duty past
    /// [`max_duty`](Self::max_duty) produces whatever the hardware defines
    /// for an over-range register value.
    fn set_duty(&mut self, channel: LedChannel, duty: u16);

    /// Starts PWM generation on the channel.
    fn start(&mut self, channel: LedChannel);

    /// Stops PWM generation on the channel, leaving its duty register
    /// unchanged.
    fn stop(&mut self, channel: LedChannel);

    /// Clears the pending periodic-tick signal.
    ///
    /// The breather calls this first on every tick, before any other work,
    /// so a tick raised while the current one is processed is not lost.
    /// Must be callable from the tick context.
    fn acknowledge_tick(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_numbering_round_trips() {
        for channel in LedChannel::ALL {
            assert_eq!(LedChannel::from_number(channel.number()), Some(channel));
            assert_eq!(channel.index() as u32 + 1, channel.number());
        }
    }

    #[test]
    fn unknown_numbers_map_to_none() {
        assert_eq!(LedChannel::from_number(0), None);
        assert_eq!(LedChannel::from_number(4), None);
        assert_eq!(LedChannel::from_number(u32::MAX), None);
    }
}
