//! Shared test infrastructure for led-breather integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use led_breather::{CHANNEL_COUNT, LedChannel, PwmOutput};

// ============================================================================
// Mock PWM collaborator
// ============================================================================

/// One recorded call into the mock collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmCall {
    Init,
    AcknowledgeTick,
    SetDuty(LedChannel, u16),
    Start(LedChannel),
    Stop(LedChannel),
}

/// Mock PWM timer that records every call for testing
pub struct MockPwm {
    max_duty: u16,
    duty: [u16; CHANNEL_COUNT],
    running: [bool; CHANNEL_COUNT],
    init_failure: Option<u32>,
    calls: heapless::Vec<PwmCall, 64>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            max_duty: 1000,
            duty: [0; CHANNEL_COUNT],
            running: [false; CHANNEL_COUNT],
            init_failure: None,
            calls: heapless::Vec::new(),
        }
    }

    /// Mock with a duty resolution other than the default 1000
    pub fn with_max_duty(max_duty: u16) -> Self {
        let mut pwm = Self::new();
        pwm.max_duty = max_duty;
        pwm
    }

    /// Mock whose init call reports the given hardware failure code
    pub fn failing_init(code: u32) -> Self {
        let mut pwm = Self::new();
        pwm.init_failure = Some(code);
        pwm
    }

    /// Value currently latched in the channel's duty register
    pub fn duty(&self, channel: LedChannel) -> u16 {
        self.duty[channel.index()]
    }

    /// Whether PWM generation is currently started on the channel
    pub fn is_running(&self, channel: LedChannel) -> bool {
        self.running[channel.index()]
    }

    /// Calls recorded so far (lossy once the buffer fills)
    pub fn calls(&self) -> &[PwmCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl PwmOutput for MockPwm {
    type Error = u32;

    fn init(&mut self) -> Result<(), u32> {
        let _ = self.calls.push(PwmCall::Init);
        match self.init_failure {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }

    fn max_duty(&self) -> u16 {
        self.max_duty
    }

    fn set_duty(&mut self, channel: LedChannel, duty: u16) {
        self.duty[channel.index()] = duty;
        let _ = self.calls.push(PwmCall::SetDuty(channel, duty));
    }

    fn start(&mut self, channel: LedChannel) {
        self.running[channel.index()] = true;
        let _ = self.calls.push(PwmCall::Start(channel));
    }

    fn stop(&mut self, channel: LedChannel) {
        self.running[channel.index()] = false;
        let _ = self.calls.push(PwmCall::Stop(channel));
    }

    fn acknowledge_tick(&mut self) {
        let _ = self.calls.push(PwmCall::AcknowledgeTick);
    }
}

// ============================================================================
// Test helper functions
// ============================================================================

/// Run the tick handler `n` times
pub fn tick_n(breather: &mut led_breather::LedBreather<MockPwm>, n: u32) {
    for _ in 0..n {
        breather.on_tick();
    }
}
