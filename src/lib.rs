//! # BIT
//!
//! A parser and tree-walking interpreter for the BIT esoteric programming
//! language, where every program is spelled out of ZERO and ONE tokens and
//! pointers are made of bits.
//!
//! ```text
//! <code>         ::= <line> [ <line> ]...
//! <line>         ::= "LINE NUMBER" <bits> "CODE" <instruction> [ <goto> ]
//! <instruction>  ::= <command>
//!                  | <assignment>
//! <goto>         ::= "GOTO" [ "VARIABLE" ] <bits> [ "IF THE JUMP REGISTER IS" [ "EQUAL TO" ] <bit>
//!                  [ "GOTO" [ "VARIABLE" ] <bits> "IF THE JUMP REGISTER IS" [ "EQUAL TO" ] <bit> ] ]
//! <command>      ::= "PRINT" <bit>
//!                  | "READ"
//! <assignment>   ::= (<variable> | <expression>) "EQUALS" <expression>
//! <expression>   ::= <expression2> [ "NAND" <expression2> ]
//! <expression2>  ::= [ "THE ADDRESS OF" ] <expression3>
//! <expression3>  ::= [ "THE VALUE BEYOND" ] <expression4>
//! <expression4>  ::= [ "THE VALUE AT" ] <expression5>
//! <expression5>  ::= <variable>
//!                  | <bits>
//!                  | "OPEN PARENTHESIS" <expression> "CLOSE PARENTHESIS"
//! <variable>     ::= "VARIABLE" <bits>
//!                  | "THE JUMP REGISTER"
//! <bits>         ::= <bit> [ <bit> ]...
//! <bit>          ::= "ZERO"
//!                  | "ONE"
//! ```
//!
//! Whitespace may appear anywhere, including inside a keyword, so
//! `LINE NUMBER` and `LINENUMBER` name the same symbol.

pub mod lang;
pub mod mach;
