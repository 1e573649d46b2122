//! Breathing-LED controller: the context object shared between the periodic
//! tick and the command interface.
//!
//! [`LedBreather`] owns the hardware collaborator, the ramp state, the
//! enable flag and the per-channel duty/active mirrors. The platform calls
//! [`on_tick`](LedBreather::on_tick) once per timer period from its
//! interrupt or timer-task context, and routes interactive commands to
//! [`handle`](LedBreather::handle) from the foreground context.
//!
//! # Sharing between contexts
//!
//! The enable flag is an `AtomicBool`:
//! [`set_enabled`](LedBreather::set_enabled) takes `&self` and performs a
//! single relaxed store, so the command context can flip it without locking,
//! and the tick path re-reads it fresh on every entry. Everything else takes
//! `&mut self`; on targets where the tick preempts the command context,
//! share the breather under your platform's brief critical section (e.g.
//! `critical_section::Mutex<RefCell<...>>` on bare-metal Cortex-M) for the
//! compound mutations. The ramp state is only ever touched from the tick
//! path.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::command::BreatherCommand;
use crate::output::{CHANNEL_COUNT, LedChannel, PwmOutput};
use crate::ramp::DutyRamp;

/// Drives three PWM LED channels, autonomously breathing channel 1.
pub struct LedBreather<P: PwmOutput> {
    pwm: P,
    ramp: DutyRamp,
    enabled: AtomicBool,
    duty: [u16; CHANNEL_COUNT],
    active: [bool; CHANNEL_COUNT],
}

impl<P: PwmOutput> LedBreather<P> {
    /// Creates a breather around an already-constructed collaborator.
    ///
    /// Breathing starts disabled, all channels inactive, the ramp at the
    /// bottom of the wave. Call [`init`](Self::init) (or dispatch
    /// [`BreatherCommand::Init`]) before expecting ticks.
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            ramp: DutyRamp::new(),
            enabled: AtomicBool::new(false),
            duty: [0; CHANNEL_COUNT],
            active: [false; CHANNEL_COUNT],
        }
    }

    /// Brings up the hardware collaborator and arms the periodic tick.
    ///
    /// On success every channel's duty register is preloaded with the
    /// mid-scale value (`max_duty / 2`) without starting generation. On
    /// failure the collaborator's code is returned and nothing further is
    /// initialized; no retry is attempted.
    pub fn init(&mut self) -> Result<(), P::Error> {
        self.pwm.init()?;

        let mid = self.pwm.max_duty() / 2;
        for channel in LedChannel::ALL {
            self.duty[channel.index()] = mid;
            self.pwm.set_duty(channel, mid);
        }
        Ok(())
    }

    /// Enables or disables the breathing effect on channel 1.
    ///
    /// A single atomic store; idempotent, and safe to call through a shared
    /// reference while the tick context is live. Disabling freezes channel 1
    /// at whatever duty the ramp last latched; the ramp keeps its position
    /// and resumes from there when re-enabled.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Returns whether breathing is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Latches an explicit duty setpoint, starting generation on the channel
    /// if it is not already active.
    ///
    /// The write takes effect immediately, neither queued nor rate-limited.
    /// No bounds check is applied; a value past the hardware's duty range is
    /// the caller's responsibility. While breathing is enabled the ramp owns
    /// channel 1 and overrides an explicit channel-1 setpoint on the next
    /// tick.
    pub fn set_channel_duty(&mut self, channel: LedChannel, duty: u16) {
        if !self.active[channel.index()] {
            self.pwm.start(channel);
            self.active[channel.index()] = true;
        }
        self.duty[channel.index()] = duty;
        self.pwm.set_duty(channel, duty);
    }

    /// Stops PWM generation on all three channels.
    ///
    /// Generation is gated off only; the duty registers keep their last
    /// values.
    pub fn stop_all(&mut self) {
        for channel in LedChannel::ALL {
            self.pwm.stop(channel);
            self.active[channel.index()] = false;
        }
    }

    /// Runs one periodic tick. Call exactly once per timer period, from the
    /// timer interrupt or timer-task context.
    ///
    /// Acknowledges the tick signal first so a tick raised during processing
    /// is not lost, then takes one fresh atomic read of the enable flag.
    /// When enabled, advances the ramp and latches its value into channel 1,
    /// overriding any explicit channel-1 setpoint; channels 2 and 3 are
    /// never touched. Generation gating is left alone: a stopped channel 1
    /// keeps receiving register updates that only become visible once the
    /// channel is restarted.
    ///
    /// Never blocks and never allocates; there is no error path.
    pub fn on_tick(&mut self) {
        self.pwm.acknowledge_tick();

        if !self.enabled.load(Ordering::Relaxed) {
            return;
        }

        self.ramp = self.ramp.step(self.pwm.max_duty());
        self.duty[LedChannel::Ch1.index()] = self.ramp.value();
        self.pwm.set_duty(LedChannel::Ch1, self.ramp.value());
    }

    /// Dispatches a parsed command to the matching control-surface method.
    ///
    /// The `pwm` channel argument `0` is the stop-all sentinel; channels 1-3
    /// address their [`LedChannel`]; any other channel number is a silent
    /// no-op. A nonzero `enable` flag enables breathing, zero disables it.
    pub fn handle(&mut self, command: BreatherCommand) -> Result<(), P::Error> {
        match command {
            BreatherCommand::Init => self.init()?,
            BreatherCommand::Pwm { channel: 0, .. } => self.stop_all(),
            BreatherCommand::Pwm { channel, value } => {
                if let Some(channel) = LedChannel::from_number(channel) {
                    self.set_channel_duty(channel, value as u16);
                }
            }
            BreatherCommand::Enable { flag } => self.set_enabled(flag != 0),
        }
        Ok(())
    }

    /// Returns the last duty value latched for the channel.
    pub fn channel_duty(&self, channel: LedChannel) -> u16 {
        self.duty[channel.index()]
    }

    /// Returns whether PWM generation is currently started on the channel.
    pub fn is_active(&self, channel: LedChannel) -> bool {
        self.active[channel.index()]
    }

    /// Returns a snapshot of the ramp state.
    pub fn ramp(&self) -> DutyRamp {
        self.ramp
    }

    /// Returns a reference to the hardware collaborator.
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Returns a mutable reference to the hardware collaborator.
    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }
}
