//! Argument dispatch
//!
//! Picks exactly one encoder path for the invocation. `--clear`, `--runseq`,
//! `--reset` and `--raw` take precedence over `--mode`, in that order, and
//! ignore the label.

use anyhow::{Context, Result};
use betabrite_core::{compile_message, GlyphTable, SignCharset, Utf8Glyphs};
use betabrite_protocol::memory::{clear_memory, configure_memory};
use betabrite_protocol::special::encode_special;
use betabrite_protocol::string_file::write_string;
use betabrite_protocol::{Command, Label};

use crate::cli::{Cli, Mode};
use crate::config::Charset;

/// The single thing this invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Clear,
    ResumeSequence,
    SoftReset,
    Raw,
    Encode(Mode),
}

impl Action {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.clear {
            Action::Clear
        } else if cli.runseq {
            Action::ResumeSequence
        } else if cli.reset {
            Action::SoftReset
        } else if cli.raw {
            Action::Raw
        } else {
            Action::Encode(cli.mode)
        }
    }
}

/// Glyph table for the configured charset
pub fn glyph_table(charset: Charset) -> &'static dyn GlyphTable {
    match charset {
        Charset::Utf8 => &Utf8Glyphs,
        Charset::Extended => &SignCharset,
    }
}

/// Build the command for `action`
pub fn build_command(
    action: Action,
    label: &str,
    data: &[String],
    glyphs: &dyn GlyphTable,
) -> Result<Command> {
    let command = match action {
        Action::Clear => clear_memory(),
        Action::ResumeSequence => Command::resume_sequence(),
        Action::SoftReset => Command::soft_reset(),
        Action::Raw => Command::raw(data).context("raw needs at least one data argument")?,
        Action::Encode(Mode::Text) => compile_message(parse_label(label)?, data, glyphs),
        Action::Encode(Mode::String) => write_string(parse_label(label)?, data),
        Action::Encode(Mode::CfgMem) => {
            configure_memory(data).context("invalid memory configuration")?
        }
        Action::Encode(mode) => {
            encode_special(mode.name(), data).with_context(|| format!("invalid {} data", mode.name()))?
        }
    };
    Ok(command)
}

fn parse_label(label: &str) -> Result<Label> {
    Label::parse(label).with_context(|| format!("invalid label {label:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn payload(args: &[&str]) -> Result<Vec<u8>> {
        let cli = Cli::try_parse_from(std::iter::once("betabrite").chain(args.iter().copied()))?;
        let command = build_command(
            Action::from_cli(&cli),
            &cli.label,
            &cli.data,
            glyph_table(Charset::Utf8),
        )?;
        Ok(command.to_payload())
    }

    #[test]
    fn test_text_mode() {
        assert_eq!(
            payload(&["--label", "B", "[red]", "Hi"]).unwrap(),
            b"AB\x1b o\x1c1Hi"
        );
    }

    #[test]
    fn test_string_mode() {
        assert_eq!(
            payload(&["--mode", "string", "--label", "1", "72", "F"]).unwrap(),
            b"G172F"
        );
    }

    #[test]
    fn test_special_modes() {
        assert_eq!(payload(&["--mode", "settime", "09:05"]).unwrap(), b"E 0905");
        assert_eq!(payload(&["--mode", "setdate", "01/02/25"]).unwrap(), b"E;010225");
        assert_eq!(payload(&["--mode", "setday", "4"]).unwrap(), b"E&4");
        assert_eq!(payload(&["--mode", "setsequence", "ABC"]).unwrap(), b"E.ABC");
        assert!(payload(&["--mode", "settime", "9:05"]).is_err());
        assert!(payload(&["--mode", "setday", "1", "2"]).is_err());
    }

    #[test]
    fn test_cfgmem() {
        assert_eq!(
            payload(&["--mode", "cfgmem", "t[A,256]"]).unwrap(),
            b"E$AAU010000FF"
        );
        let err = payload(&["--mode", "cfgmem", "t[A,10]", "s[?,10]"]).unwrap_err();
        assert!(format!("{err:#}").contains("descriptor #2"));
    }

    #[test]
    fn test_flag_precedence() {
        assert_eq!(payload(&["--clear", "--runseq", "x"]).unwrap(), b"E$");
        assert_eq!(payload(&["--runseq", "--raw", "x"]).unwrap(), b"A0");
        assert_eq!(payload(&["--reset", "--raw", "x"]).unwrap(), b"E,");
        assert_eq!(payload(&["--raw", "--mode", "settime", "E", "!x"]).unwrap(), b"E!x");
    }

    #[test]
    fn test_raw_needs_data() {
        assert!(payload(&["--raw"]).is_err());
    }

    #[test]
    fn test_bad_label() {
        assert!(payload(&["--label", "AB", "hello"]).is_err());
        // Label is ignored by the flag actions
        assert!(payload(&["--label", "AB", "--clear"]).is_ok());
    }

    #[test]
    fn test_extended_charset() {
        let command = build_command(
            Action::Encode(Mode::Text),
            "A",
            &["déjà".to_string()],
            glyph_table(Charset::Extended),
        )
        .unwrap();
        assert_eq!(command.to_payload(), b"AA\x1b o\x1cCd\x82j\x85");
    }
}
