//! Command line surface

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// What the data arguments encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Tag-annotated message for a TEXT file
    #[default]
    Text,
    /// Verbatim contents of a STRING file
    String,
    /// Set the date, MM/DD/YY
    #[value(name = "setdate")]
    SetDate,
    /// Set the time, HH:MM
    #[value(name = "settime")]
    SetTime,
    /// Set the order TEXT files run in
    #[value(name = "setsequence")]
    SetSequence,
    /// Set the day of week, 1 (Sunday) to 7
    #[value(name = "setday")]
    SetDay,
    /// Partition memory with s[label,size] / t[label,size] descriptors
    #[value(name = "cfgmem")]
    CfgMem,
}

impl Mode {
    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::String => "string",
            Mode::SetDate => "setdate",
            Mode::SetTime => "settime",
            Mode::SetSequence => "setsequence",
            Mode::SetDay => "setday",
            Mode::CfgMem => "cfgmem",
        }
    }
}

/// Send messages and commands to a BetaBrite / Alpha LED sign
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// What the data arguments encode
    #[arg(long, value_enum, default_value_t = Mode::Text)]
    pub mode: Mode,

    /// TEXT or STRING file label; 0 is the priority message
    #[arg(long, default_value = "A")]
    pub label: String,

    /// Send the data arguments verbatim as the payload
    #[arg(long)]
    pub raw: bool,

    /// Release a sign stuck on the priority message
    #[arg(long)]
    pub runseq: bool,

    /// Clear every TEXT and STRING file
    #[arg(long)]
    pub clear: bool,

    /// Soft reset the sign
    #[arg(long)]
    pub reset: bool,

    /// Print the framed bytes as hex instead of sending them
    #[arg(long)]
    pub dump: bool,

    /// Sign address, two characters of 0-9, A-F or ?
    #[arg(long)]
    pub address: Option<String>,

    /// Sign type name (e.g. all, betabrite) or code character
    #[arg(long)]
    pub sign_type: Option<String>,

    /// Minimum gap between bytes on the link, in microseconds
    #[arg(long)]
    pub delay_us: Option<u64>,

    /// Configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Message words, string fragments or special function data
    ///
    /// Required except for `--clear`, `--runseq` and `--reset`.
    #[arg(required_unless_present_any = ["clear", "runseq", "reset"])]
    pub data: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["betabrite", "hello", "world"]).unwrap();
        assert_eq!(cli.mode, Mode::Text);
        assert_eq!(cli.label, "A");
        assert_eq!(cli.data, ["hello", "world"]);
        assert!(!cli.raw && !cli.clear && !cli.runseq && !cli.dump);
    }

    #[test]
    fn test_mode_names() {
        for mode in Mode::value_variants() {
            let cli = Cli::try_parse_from(["betabrite", "--mode", mode.name(), "x"]).unwrap();
            assert_eq!(cli.mode, *mode);
        }
        assert!(Cli::try_parse_from(["betabrite", "--mode", "set-date", "x"]).is_err());
    }

    #[test]
    fn test_data_required_for_encoders() {
        assert!(Cli::try_parse_from(["betabrite"]).is_err());
        assert!(Cli::try_parse_from(["betabrite", "--mode", "string"]).is_err());
        assert!(Cli::try_parse_from(["betabrite", "--raw"]).is_err());
    }

    #[test]
    fn test_flag_actions_need_no_data() {
        for flag in ["--clear", "--runseq", "--reset"] {
            let cli = Cli::try_parse_from(["betabrite", flag]).unwrap();
            assert!(cli.data.is_empty());
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["betabrite", "-vv", "--dump", "hi"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.dump);
    }
}
