//! Console helpers.

use log::debug;
use std::io::BufRead;

/// Block until a line (or end of input) is read. Nothing is echoed.
pub fn wait_for_keypress<R: BufRead>(mut input: R) {
    let mut discarded = Vec::new();
    if let Err(err) = input.read_until(b'\n', &mut discarded) {
        debug!("Keypress wait aborted: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn consumes_exactly_one_line() {
        let mut input = Cursor::new(b"\nrest".to_vec());
        wait_for_keypress(&mut input);

        let mut remaining = String::new();
        input.read_to_string(&mut remaining).expect("read rest");
        assert_eq!(remaining, "rest");
    }

    #[test]
    fn returns_on_end_of_input() {
        wait_for_keypress(Cursor::new(Vec::new()));
    }
}
