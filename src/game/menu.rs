//! Move Menu

/// Parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index into the move list.
    Move(usize),
    /// `0`
    Exit,
    /// `?`
    Help,
    /// Anything else, empty lines included.
    Invalid,
}

/// Menu listing the moves with 1-based numbers.
#[derive(Clone, Debug)]
pub struct Menu {
    text: String,
    move_count: usize,
}

impl Menu {
    /// Build the menu for a move list.
    pub fn new(moves: &[String]) -> Self {
        let mut text = String::from("Available moves:\n");
        for (i, name) in moves.iter().enumerate() {
            text.push_str(&format!("{} - {}\n", i + 1, name));
        }
        text.push_str("0 - exit\n");
        text.push_str("? - help\n");
        text.push_str("Enter your move: ");

        Self {
            text,
            move_count: moves.len(),
        }
    }

    /// Menu text, ending with the prompt (no trailing newline).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Interpret one input line. The line terminator is ignored; nothing
    /// else is trimmed.
    pub fn parse(&self, line: &str) -> Choice {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match line {
            "0" => Choice::Exit,
            "?" => Choice::Help,
            _ => match line.parse::<usize>() {
                // Canonical form only: "01" and "+1" are not menu entries
                Ok(n) if (1..=self.move_count).contains(&n) && n.to_string() == line => {
                    Choice::Move(n - 1)
                }
                _ => Choice::Invalid,
            },
        }
    }
}
