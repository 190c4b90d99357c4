use std::f64::consts;
use std::fmt;

use crate::ast::Operator;

/// A classified expression token.
///
/// Every input string maps to exactly one variant, or is rejected by the
/// classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Decimal floating-point literal
    ///
    /// # Examples
    /// ```text
    /// 2
    /// 3.576
    /// -1.5e3
    /// ```
    Number(f64),

    /// The free variable `x`
    Variable,

    /// Named constant
    ///
    /// # Examples
    /// ```text
    /// PI
    /// ```
    Constant(Constant),

    /// Binary operator: `+ - * / ^`
    Operator(Operator),

    /// Unary function call. The token opens the argument group itself.
    ///
    /// `open_included` is false for the split spelling (`sin` followed by a
    /// separate `(`).
    ///
    /// # Examples
    /// ```text
    /// sin( x )
    /// exp ( 3 * x )
    /// ```
    Function { function: Function, open_included: bool },

    /// Left parenthesis
    OpenGroup,

    /// Right parenthesis
    CloseGroup,
}

/// Named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
}

static CONSTANTS: [(&str, Constant); 1] = [("PI", Constant::Pi)];

impl Constant {
    pub fn from_name(name: &str) -> Option<Self> {
        CONSTANTS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "PI",
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
        }
    }

    pub fn all() -> impl Iterator<Item = Constant> {
        CONSTANTS.iter().map(|(_, c)| *c)
    }
}

/// Unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
}

// `tg` is the canonical tangent spelling, `tan` an alias.
static FUNCTIONS: [(&str, Function); 5] = [
    ("sin", Function::Sin),
    ("cos", Function::Cos),
    ("tg", Function::Tan),
    ("tan", Function::Tan),
    ("exp", Function::Exp),
];

impl Function {
    /// Looks up a function by bare name (`sin`, not `sin(`).
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tg",
            Function::Exp => "exp",
        }
    }

    pub fn apply(self, value: f64) -> f64 {
        match self {
            Function::Sin => value.sin(),
            Function::Cos => value.cos(),
            Function::Tan => value.tan(),
            Function::Exp => value.exp(),
        }
    }

    /// Every accepted spelling, aliases included.
    pub fn spellings() -> impl Iterator<Item = (&'static str, Function)> {
        FUNCTIONS.iter().copied()
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Functions print with their opening delimiter, `sin(`.
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Variable => f.write_str("x"),
            Token::Constant(c) => write!(f, "{}", c),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Function { function, .. } => write!(f, "{}", function),
            Token::OpenGroup => f.write_str("("),
            Token::CloseGroup => f.write_str(")"),
        }
    }
}
