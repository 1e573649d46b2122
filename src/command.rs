//! Typed commands for the interactive control surface.
//!
//! The monitor registers three commands; this module turns a raw command
//! line into the matching [`BreatherCommand`] for
//! [`LedBreather::handle`](crate::breather::LedBreather::handle) to
//! dispatch. Arguments are positional and numeric; nothing beyond what the
//! numeric parser enforces is validated here.

use heapless::Vec;

/// Most tokens a command line may carry: the command name plus its
/// positional arguments.
const MAX_TOKENS: usize = 4;

/// A parsed control-surface command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BreatherCommand {
    /// `pwminit`: bring up the timer/GPIO hardware and arm the periodic
    /// tick.
    Init,

    /// `pwm <channel> <value>`: channel 0 stops all outputs; channels 1-3
    /// start that channel and latch its duty value.
    Pwm { channel: u32, value: i32 },

    /// `enable <flag>`: nonzero enables breathing, zero disables it.
    Enable { flag: u32 },
}

/// Command-line parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The line names no known command.
    UnknownCommand,

    /// A required positional argument is missing.
    MissingArgument,

    /// An argument did not parse as the expected numeric type.
    InvalidArgument,

    /// The line carries more tokens than any command accepts.
    TooManyArguments,
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::UnknownCommand => {
                write!(f, "unknown command")
            }
            CommandError::MissingArgument => {
                write!(f, "missing positional argument")
            }
            CommandError::InvalidArgument => {
                write!(f, "argument is not a valid number")
            }
            CommandError::TooManyArguments => {
                write!(f, "too many arguments")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

impl BreatherCommand {
    /// Parses one interactive command line.
    ///
    /// Tokenization is whitespace-separated and bounded: a line with more
    /// than `MAX_TOKENS` tokens is rejected rather than truncated.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens: Vec<&str, MAX_TOKENS> = Vec::new();
        for token in line.split_whitespace() {
            tokens
                .push(token)
                .map_err(|_| CommandError::TooManyArguments)?;
        }

        let mut tokens = tokens.into_iter();
        let name = tokens.next().ok_or(CommandError::UnknownCommand)?;

        match name {
            "pwminit" => Ok(BreatherCommand::Init),
            "pwm" => {
                let channel = parse_arg::<u32>(tokens.next())?;
                let value = parse_arg::<i32>(tokens.next())?;
                Ok(BreatherCommand::Pwm { channel, value })
            }
            "enable" => {
                let flag = parse_arg::<u32>(tokens.next())?;
                Ok(BreatherCommand::Enable { flag })
            }
            _ => Err(CommandError::UnknownCommand),
        }
    }
}

fn parse_arg<T: core::str::FromStr>(token: Option<&str>) -> Result<T, CommandError> {
    token
        .ok_or(CommandError::MissingArgument)?
        .parse()
        .map_err(|_| CommandError::InvalidArgument)
}
