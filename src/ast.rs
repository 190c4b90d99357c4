//! # Expression Syntax
//!
//! Types shared by every stage of the expression pipeline.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Classified input tokens, constants and functions
//! - **[operators]** - Binary operators and their precedence table
//! - **[postfix]** - Reverse-Polish instruction sequences
//!
//! ## Pipeline
//!
//! ```text
//! "sin( x ^ 2 )"  --Lexer-->  ["sin(", "x", "^", "2", ")"]
//!                 --classify-->  [Function(Sin), Variable, Operator(Power), Number(2), CloseGroup]
//!                 --Parser-->  x 2 ^ sin(
//!                 --Evaluator(x = 1.0)-->  0.8414...
//! ```
//!
//! ## Recognized Symbols
//!
//! | kind      | tokens                              |
//! |-----------|-------------------------------------|
//! | variable  | `x`                                 |
//! | constant  | `PI`                                |
//! | operator  | `+ - * / ^`                         |
//! | function  | `sin( cos( tg( tan( exp(`           |
//! | grouping  | `(` `)`                             |
//!
//! Functions may also be written split, `sin ( x )`.
//!
//! ## Operator Table
//!
//! | operator | precedence | associativity |
//! |----------|------------|---------------|
//! | `^`      | 4          | right         |
//! | `*` `/`  | 3          | left          |
//! | `+` `-`  | 2          | left          |
pub mod tokens;
pub mod operators;
pub mod postfix;

pub use tokens::{Constant, Function, Token};
pub use operators::{Associativity, Operator, OperatorInfo};
pub use postfix::{Instruction, Postfix};
