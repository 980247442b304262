use bookshelf::model::parse_int_prefix;
use std::io::{self, BufRead, Write};

/// Line-oriented operator input.
///
/// Every method returns `Ok(None)` once input is exhausted, so callers decide
/// what end-of-input means for them.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `msg` and read one line without its line ending.
    pub fn line(&mut self, msg: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Ask until the answer starts with an integer. Trailing text is ignored.
    pub fn int(&mut self, msg: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(answer) = self.line(msg)? else {
                return Ok(None);
            };
            if let Some(value) = parse_int_prefix(&answer) {
                return Ok(Some(value));
            }
            writeln!(self.output, "Please enter a valid integer.")?;
        }
    }

    /// Yes/no question; only answers starting with `y` or `Y` are a yes.
    pub fn confirm(&mut self, msg: &str) -> io::Result<Option<bool>> {
        Ok(self.line(msg)?.map(|answer| is_yes(&answer)))
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.chars().next(), Some('y' | 'Y'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn line_strips_newline_and_carriage_return() {
        let mut p = prompter("Dune\r\nnext\n");
        assert_eq!(p.line("Title: ").unwrap().as_deref(), Some("Dune"));
        assert_eq!(p.line("Title: ").unwrap().as_deref(), Some("next"));
        assert_eq!(output(p), "Title: Title: ");
    }

    #[test]
    fn line_returns_none_at_end_of_input() {
        let mut p = prompter("");
        assert_eq!(p.line("Title: ").unwrap(), None);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut p = prompter("tail");
        assert_eq!(p.line("> ").unwrap().as_deref(), Some("tail"));
    }

    #[test]
    fn int_reprompts_until_valid() {
        let mut p = prompter("abc\n\n 42 books\n");
        assert_eq!(p.int("ID: ").unwrap(), Some(42));
        let out = output(p);
        assert_eq!(out.matches("Please enter a valid integer.").count(), 2);
        assert_eq!(out.matches("ID: ").count(), 3);
    }

    #[test]
    fn int_gives_up_at_end_of_input() {
        let mut p = prompter("nope\n");
        assert_eq!(p.int("ID: ").unwrap(), None);
    }

    #[test]
    fn confirm_checks_first_character() {
        let mut p = prompter("yes\nY\nn\n\nmaybe\n");
        assert_eq!(p.confirm("? ").unwrap(), Some(true));
        assert_eq!(p.confirm("? ").unwrap(), Some(true));
        assert_eq!(p.confirm("? ").unwrap(), Some(false));
        assert_eq!(p.confirm("? ").unwrap(), Some(false));
        assert_eq!(p.confirm("? ").unwrap(), Some(false));
        assert_eq!(p.confirm("? ").unwrap(), None);
    }
}
