/// High-level actions that can be performed in the editor.
///
/// Every action that can be bound to a key has a stable snake_case name,
/// which is what config files refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Character input
    InsertChar(char),
    InsertNewline,
    InsertTab,

    // Movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    MoveDocumentStart,
    MoveDocumentEnd,

    // Editing
    DeleteBackward,
    DeleteForward,

    // History
    Undo,
    Redo,

    // Search
    Find,
    FindNext,
    Replace,

    // Files
    Save,
    SaveAs,
    NewFile,
    OpenFile,
    ShowPath,

    Quit,
}

impl Action {
    /// Every action that can be looked up by name
    pub const NAMED: &'static [Action] = &[
        Action::InsertNewline,
        Action::InsertTab,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLineStart,
        Action::MoveLineEnd,
        Action::MoveDocumentStart,
        Action::MoveDocumentEnd,
        Action::DeleteBackward,
        Action::DeleteForward,
        Action::Undo,
        Action::Redo,
        Action::Find,
        Action::FindNext,
        Action::Replace,
        Action::Save,
        Action::SaveAs,
        Action::NewFile,
        Action::OpenFile,
        Action::ShowPath,
        Action::Quit,
    ];

    /// Parse an action from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.trim() {
            "insert_newline" => Self::InsertNewline,
            "insert_tab" => Self::InsertTab,
            "move_left" => Self::MoveLeft,
            "move_right" => Self::MoveRight,
            "move_up" => Self::MoveUp,
            "move_down" => Self::MoveDown,
            "move_line_start" => Self::MoveLineStart,
            "move_line_end" => Self::MoveLineEnd,
            "move_document_start" => Self::MoveDocumentStart,
            "move_document_end" => Self::MoveDocumentEnd,
            "delete_backward" => Self::DeleteBackward,
            "delete_forward" => Self::DeleteForward,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "find" => Self::Find,
            "find_next" => Self::FindNext,
            "replace" => Self::Replace,
            "save" => Self::Save,
            "save_as" => Self::SaveAs,
            "new_file" => Self::NewFile,
            "open_file" | "open" => Self::OpenFile,
            "show_path" => Self::ShowPath,
            "quit" => Self::Quit,
            _ => return None,
        })
    }

    /// Config name of the action. Character input has no name.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::InsertChar(_) => return None,
            Self::InsertNewline => "insert_newline",
            Self::InsertTab => "insert_tab",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::MoveLineStart => "move_line_start",
            Self::MoveLineEnd => "move_line_end",
            Self::MoveDocumentStart => "move_document_start",
            Self::MoveDocumentEnd => "move_document_end",
            Self::DeleteBackward => "delete_backward",
            Self::DeleteForward => "delete_forward",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Find => "find",
            Self::FindNext => "find_next",
            Self::Replace => "replace",
            Self::Save => "save",
            Self::SaveAs => "save_as",
            Self::NewFile => "new_file",
            Self::OpenFile => "open_file",
            Self::ShowPath => "show_path",
            Self::Quit => "quit",
        })
    }

    /// Whether the action changes the buffer text
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertNewline
                | Self::InsertTab
                | Self::DeleteBackward
                | Self::DeleteForward
        )
    }
}
