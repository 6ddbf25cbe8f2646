//! Help text for the command line.

/// Get usage text for the `human-duration` binary.
#[must_use]
pub const fn help_text() -> &'static str {
    r#"Usage: human-duration [options] VALUE...

Formats each VALUE (a non-negative whole number of seconds) on its own line.

Options:
  --precision, -p UNIT  Finest unit shown (default: second)
  --ceiling, -c UNIT    Collapse coarser units into UNIT
  --short, -s           Compact form, e.g. 1d4m
  --timestamp, -t       Clock form, e.g. 24:04:08
  --padded              Zero-pad every count after the first
  --millis              Read VALUEs as milliseconds

Units: second, minute, hour, day, week, year (plural also accepted)

Environment:
  HUMAN_DURATION_PRECISION, HUMAN_DURATION_CEILING,
  HUMAN_DURATION_STYLE (long, short, timestamp), LOG_LEVEL

Examples:
  human-duration 86648
  human-duration --precision minute 3660 7200
  human-duration --ceiling hour --timestamp 91214
  human-duration --millis --short 1500
"#
}
