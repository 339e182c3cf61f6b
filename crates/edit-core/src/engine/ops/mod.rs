pub mod mutate_residue;
pub mod remove_chain;
pub mod remove_hetatm;
pub mod replace_metal;
pub mod survey;

use std::borrow::Borrow;

// All operations rejoin with '\n' and a trailing newline, whatever the source
// used.
pub(crate) fn rejoin<S: Borrow<str>>(lines: &[S]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
