
/// Closed set of formula items and key actions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    None,

    PositiveInfinity,
    NegativeInfinity,
    NaN,
    Number,

    Pi,
    E,

    LeftParen,
    RightParen,

    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Factorial,
    Modulo,

    Sqrt,
    Sin,
    Cos,
    Tan,
    ASin,
    ACos,
    ATan,
    Ln,
    Log10,
    Log2,
    Abs,

    MemoryStore,
    MemoryRecall,
    Delete,
    AllClear,
    CursorLeft,
    CursorRight,
    Equals,
}

pub(crate) const ALL_KINDS: [ItemKind; 34] = [
    ItemKind::None,
    ItemKind::PositiveInfinity,
    ItemKind::NegativeInfinity,
    ItemKind::NaN,
    ItemKind::Number,
    ItemKind::Pi,
    ItemKind::E,
    ItemKind::LeftParen,
    ItemKind::RightParen,
    ItemKind::Plus,
    ItemKind::Minus,
    ItemKind::Multiply,
    ItemKind::Divide,
    ItemKind::Power,
    ItemKind::Factorial,
    ItemKind::Modulo,
    ItemKind::Sqrt,
    ItemKind::Sin,
    ItemKind::Cos,
    ItemKind::Tan,
    ItemKind::ASin,
    ItemKind::ACos,
    ItemKind::ATan,
    ItemKind::Ln,
    ItemKind::Log10,
    ItemKind::Log2,
    ItemKind::Abs,
    ItemKind::MemoryStore,
    ItemKind::MemoryRecall,
    ItemKind::Delete,
    ItemKind::AllClear,
    ItemKind::CursorLeft,
    ItemKind::CursorRight,
    ItemKind::Equals,
];

impl ItemKind {
    /// Precedence weight: the lower the number, the tighter the item binds.
    /// Grouping and key actions have no weight
    pub fn weight(self) -> Option<i32> {
        match self {
            ItemKind::PositiveInfinity
            | ItemKind::NegativeInfinity
            | ItemKind::NaN
            | ItemKind::Number
            | ItemKind::Pi
            | ItemKind::E => Some(0),
            ItemKind::Sqrt
            | ItemKind::Sin
            | ItemKind::Cos
            | ItemKind::Tan
            | ItemKind::ASin
            | ItemKind::ACos
            | ItemKind::ATan
            | ItemKind::Ln
            | ItemKind::Log10
            | ItemKind::Log2
            | ItemKind::Abs => Some(1),
            ItemKind::Power | ItemKind::Factorial | ItemKind::Modulo => Some(2),
            ItemKind::Multiply | ItemKind::Divide => Some(3),
            ItemKind::Plus | ItemKind::Minus => Some(4),
            _ => None,
        }
    }

    /// Canonical glyph shown on the key and in the formula
    pub fn glyph(self) -> Option<&'static str> {
        let s = match self {
            ItemKind::Pi => "π",
            ItemKind::E => "e",
            ItemKind::LeftParen => "(",
            ItemKind::RightParen => ")",
            ItemKind::Plus => "+",
            ItemKind::Minus => "-",
            ItemKind::Multiply => "×",
            ItemKind::Divide => "÷",
            ItemKind::Power => "^",
            ItemKind::Factorial => "!",
            ItemKind::Modulo => "%",
            ItemKind::Sqrt => "√",
            ItemKind::Sin => "sin",
            ItemKind::Cos => "cos",
            ItemKind::Tan => "tan",
            ItemKind::ASin => "sin⁻¹",
            ItemKind::ACos => "cos⁻¹",
            ItemKind::ATan => "tan⁻¹",
            ItemKind::Ln => "ln",
            ItemKind::Log10 => "log₁₀",
            ItemKind::Log2 => "log₂",
            ItemKind::Abs => "ABS",
            ItemKind::MemoryStore => "M",
            ItemKind::MemoryRecall => "MR",
            ItemKind::Delete => "DEL",
            ItemKind::AllClear => "AC",
            ItemKind::CursorLeft => "◀",
            ItemKind::CursorRight => "▶",
            ItemKind::Equals => "=",
            _ => return None,
        };
        Some(s)
    }

    /// Only formula items with a glyph can come back from pasted text
    pub fn is_deserializable(self) -> bool {
        self.glyph().is_some()
            && (self.weight().is_some() || self == ItemKind::LeftParen || self == ItemKind::RightParen)
    }

    /// Key actions that work on the whole buffer instead of being inserted into it
    pub fn is_control_command(self) -> bool {
        matches!(
            self,
            ItemKind::CursorLeft
                | ItemKind::CursorRight
                | ItemKind::Delete
                | ItemKind::AllClear
                | ItemKind::MemoryStore
                | ItemKind::MemoryRecall
                | ItemKind::Equals
        )
    }

    /// Looks up a pasted glyph. Returns None for unknown text and for glyphs
    /// of key actions
    pub fn from_text(text: &str) -> Option<ItemKind> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.is_deserializable() && k.glyph() == Some(text))
    }
}

/// One item of the formula buffer or one key press
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub kind: ItemKind,
    pub text: Option<String>,
}

impl Command {
    /// A command showing its kind's canonical glyph
    pub fn new(kind: ItemKind) -> Self {
        Command {
            kind,
            text: kind.glyph().map(|s| s.to_string()),
        }
    }

    pub fn with_text(kind: ItemKind, text: &str) -> Self {
        Command {
            kind,
            text: Some(text.to_string()),
        }
    }

    pub fn number(text: &str) -> Self {
        Command::with_text(ItemKind::Number, text)
    }

    /// Placeholder item that is shown but never evaluated, e.g. `=` or `ERROR!`
    pub fn marker(text: &str) -> Self {
        Command::with_text(ItemKind::None, text)
    }

    pub fn is_control_command(&self) -> bool {
        self.kind.is_control_command()
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
