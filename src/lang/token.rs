/// The fixed keyword vocabulary. The grammar is predictive, the parser
/// always knows which symbol it expects next, so symbols are matched on
/// demand against the source text instead of through a tokenizing pass.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Symbol {
    LineNumber,
    Code,
    Goto,
    IfTheJumpRegisterIs,
    EqualTo,
    Print,
    Read,
    Equals,
    Variable,
    TheJumpRegister,
    Nand,
    TheAddressOf,
    TheValueBeyond,
    TheValueAt,
    OpenParenthesis,
    CloseParenthesis,
    Zero,
    One,
}

impl Symbol {
    /// The characters the scanner matches, with the whitespace that may
    /// appear between them stripped out.
    pub fn text(self) -> &'static str {
        use Symbol::*;
        match self {
            LineNumber => "LINENUMBER",
            Code => "CODE",
            Goto => "GOTO",
            IfTheJumpRegisterIs => "IFTHEJUMPREGISTERIS",
            EqualTo => "EQUALTO",
            Print => "PRINT",
            Read => "READ",
            Equals => "EQUALS",
            Variable => "VARIABLE",
            TheJumpRegister => "THEJUMPREGISTER",
            Nand => "NAND",
            TheAddressOf => "THEADDRESSOF",
            TheValueBeyond => "THEVALUEBEYOND",
            TheValueAt => "THEVALUEAT",
            OpenParenthesis => "OPENPARENTHESIS",
            CloseParenthesis => "CLOSEPARENTHESIS",
            Zero => "ZERO",
            One => "ONE",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Symbol::*;
        match self {
            LineNumber => write!(f, "LINE NUMBER"),
            Code => write!(f, "CODE"),
            Goto => write!(f, "GOTO"),
            IfTheJumpRegisterIs => write!(f, "IF THE JUMP REGISTER IS"),
            EqualTo => write!(f, "EQUAL TO"),
            Print => write!(f, "PRINT"),
            Read => write!(f, "READ"),
            Equals => write!(f, "EQUALS"),
            Variable => write!(f, "VARIABLE"),
            TheJumpRegister => write!(f, "THE JUMP REGISTER"),
            Nand => write!(f, "NAND"),
            TheAddressOf => write!(f, "THE ADDRESS OF"),
            TheValueBeyond => write!(f, "THE VALUE BEYOND"),
            TheValueAt => write!(f, "THE VALUE AT"),
            OpenParenthesis => write!(f, "OPEN PARENTHESIS"),
            CloseParenthesis => write!(f, "CLOSE PARENTHESIS"),
            Zero => write!(f, "ZERO"),
            One => write!(f, "ONE"),
        }
    }
}
