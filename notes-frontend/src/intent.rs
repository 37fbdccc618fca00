//! User intents, keyboard chords, and the terminal command syntax.

use notes_types::NoteId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    NewNote,
    Select(NoteId),
    EditTitle(String),
    EditContent(String),
    Search(String),
    Save,
    Delete,
    Show,
    Help,
    Quit,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
}

/// What a chord maps to, and whether the host's own handling must be suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub intent: UserIntent,
    pub suppress_default: bool,
}

impl KeyChord {
    pub fn ctrl(key: char) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: true,
        }
    }

    /// Global shortcuts. Ctrl+S / Cmd+S save and swallow the native save.
    pub fn intent(&self) -> Option<KeyOutcome> {
        if (self.ctrl || self.meta) && self.key.eq_ignore_ascii_case(&'s') {
            return Some(KeyOutcome {
                intent: UserIntent::Save,
                suppress_default: true,
            });
        }
        None
    }

    /// Decode a raw control byte (e.g. 0x13 for Ctrl+S) read from a terminal.
    pub fn from_control_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01..=0x1a => Some(Self::ctrl((b'a' + byte - 1) as char)),
            _ => None,
        }
    }
}

/// Parse one line of terminal input.
///
/// Commands: `new`, `open <id>`, `title <text>`, `body <text>`, `search [query]`,
/// `save`, `delete`, `ls`, `help`, `quit`. A bare Ctrl+S byte saves.
pub fn parse_command(line: &str) -> Result<UserIntent, String> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let [byte] = line.as_bytes() {
        if let Some(outcome) = KeyChord::from_control_byte(*byte).and_then(|c| c.intent()) {
            return Ok(outcome.intent);
        }
    }

    let trimmed = line.trim_start();
    let (cmd, rest) = match trimmed.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest),
        None => (trimmed, ""),
    };

    match cmd {
        "new" | "n" => Ok(UserIntent::NewNote),
        "open" | "o" => {
            let id = rest.trim();
            if id.is_empty() {
                Err("Usage: open <id>".to_string())
            } else {
                Ok(UserIntent::Select(NoteId::new(id)))
            }
        }
        "title" | "t" => Ok(UserIntent::EditTitle(rest.to_string())),
        // Literal "\n" sequences become newlines so multi-line bodies fit on one input line
        "body" | "b" => Ok(UserIntent::EditContent(rest.replace("\\n", "\n"))),
        "search" | "/" => Ok(UserIntent::Search(rest.to_string())),
        "save" | "w" => Ok(UserIntent::Save),
        "delete" | "rm" => Ok(UserIntent::Delete),
        "ls" | "" => Ok(UserIntent::Show),
        "help" | "?" => Ok(UserIntent::Help),
        "quit" | "q" | "exit" => Ok(UserIntent::Quit),
        other => Err(format!("Unknown command: {}", other)),
    }
}

pub const HELP: &str = "\
Commands:
  new                 start a new note
  open <id>           edit an existing note
  title <text>        set the draft title
  body <text>         set the draft content (\\n for newlines)
  search [query]      filter the list (empty clears)
  save | Ctrl+S       save the draft
  delete              delete the selected note
  ls                  show the list and editor
  quit";
