//! Console sink implementation

use crate::core::{LogLevel, Result, Sink};
use colored::Colorize;

/// An output channel of the console sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
}

/// Routes lines to stdout/stderr through a per-level channel table.
///
/// A level without a channel is silently skipped, per the sink contract.
/// The stock table sends error and fatal to stderr and everything else
/// to stdout.
pub struct ConsoleSink {
    channels: [Option<Channel>; 6],
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            channels: Self::default_channels(),
            use_colors: true,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            channels: Self::default_channels(),
            use_colors,
        }
    }

    fn default_channels() -> [Option<Channel>; 6] {
        let mut channels = [Some(Channel::Stdout); 6];
        channels[LogLevel::Error as usize] = Some(Channel::Stderr);
        channels[LogLevel::Fatal as usize] = Some(Channel::Stderr);
        channels
    }

    /// Reassign or unmap the channel for one level
    ///
    /// `None` makes routing at that level a no-op.
    #[must_use]
    pub fn with_channel(mut self, level: LogLevel, channel: Option<Channel>) -> Self {
        self.channels[level as usize] = channel;
        self
    }

    /// The channel currently mapped for a level
    pub fn channel(&self, level: LogLevel) -> Option<Channel> {
        self.channels[level as usize]
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn route(&mut self, level: LogLevel, line: &str) -> Result<()> {
        let channel = match self.channels[level as usize] {
            Some(channel) => channel,
            None => return Ok(()),
        };

        let text = if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        };

        match channel {
            Channel::Stdout => println!("{}", text),
            Channel::Stderr => eprintln!("{}", text),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we may write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
