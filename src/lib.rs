pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod sampler;

pub use ast::{Associativity, Constant, Function, Instruction, Operator, Postfix, Token};
pub use evaluator::{EvalError, Evaluator, DEFAULT_DIVISION_THRESHOLD};
pub use lexer::{classify, LexError, Lexer};
pub use output::{to_csv, to_json, OutputFormat};
pub use parser::{parse, ParseError, Parser};
pub use sampler::{sample, SampleError, Samples, Sampler};
