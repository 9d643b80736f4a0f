//! STRING file encoder
//!
//! STRING files hold short text that TEXT files splice in with `[str<n>]`.
//! Data is written verbatim: fragments are concatenated as UTF-8 with no
//! separator and no glyph substitution.

use crate::command::{concat_fragments, Command, Label};

/// Replace the contents of STRING file `label`
pub fn write_string<S: AsRef<str>>(label: Label, fragments: &[S]) -> Command {
    Command::WriteString(label, concat_fragments(fragments))
}
