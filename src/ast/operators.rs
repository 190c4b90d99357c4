use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`^`)
    Power,
}

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Not an operator
    None,
    /// Left to right (`a - b - c` is `(a - b) - c`)
    Left,
    /// Right to left (`a ^ b ^ c` is `a ^ (b ^ c)`)
    Right,
}

/// Precedence and associativity of one operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Higher binds tighter
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Tightest binding first.
static OPERATORS: [Operator; 5] = [
    Operator::Power,
    Operator::Multiply,
    Operator::Divide,
    Operator::Add,
    Operator::Subtract,
];

impl Operator {
    /// Looks up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "^" => Some(Operator::Power),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }

    pub fn info(self) -> OperatorInfo {
        let (precedence, associativity) = match self {
            Operator::Power => (4, Associativity::Right),
            Operator::Multiply | Operator::Divide => (3, Associativity::Left),
            Operator::Add | Operator::Subtract => (2, Associativity::Left),
        };
        OperatorInfo { precedence, associativity }
    }

    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    pub fn associativity(self) -> Associativity {
        self.info().associativity
    }

    pub fn all() -> impl Iterator<Item = Operator> {
        OPERATORS.iter().copied()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Precedence of a raw token, 0 when it is not an operator.
pub fn precedence(token: &str) -> u8 {
    Operator::from_symbol(token).map_or(0, Operator::precedence)
}

/// Associativity of a raw token, [`Associativity::None`] when it is not an operator.
pub fn associativity(token: &str) -> Associativity {
    Operator::from_symbol(token).map_or(Associativity::None, Operator::associativity)
}
