//! Reference text for the `symbols` command

use crate::{Associativity, Constant, Function, Operator};

/// Lists every recognized token, built from the lookup tables.
pub fn get_symbols_overview() -> String {
    let mut out = String::from(
        "PLOTEXPR SYMBOLS\n\n\
         Expressions are whitespace-separated tokens in one variable, x.\n\n",
    );

    out.push_str("VARIABLE\n\n  x\n\n");

    out.push_str("CONSTANTS\n\n");
    for constant in Constant::all() {
        out.push_str(&format!("  {:<8}{}\n", constant.name(), constant.value()));
    }

    out.push_str("\nOPERATORS\n\n  symbol  precedence  associativity\n");
    for op in Operator::all() {
        let assoc = match op.associativity() {
            Associativity::Left => "left",
            Associativity::Right => "right",
            Associativity::None => "none",
        };
        out.push_str(&format!("  {:<8}{:<12}{}\n", op.symbol(), op.precedence(), assoc));
    }

    out.push_str("\nFUNCTIONS\n\n");
    for (name, function) in Function::spellings() {
        let canonical = if name == function.name() {
            String::new()
        } else {
            format!("(alias of {})", function)
        };
        out.push_str(&format!("  {:<8}{}\n", format!("{}(", name), canonical));
    }

    out.push_str(
        "\nGROUPING\n\n  ( )\n\n\
         A function token opens its own group: sin( x ). The split form\n\
         sin ( x ) is also accepted.\n\n\
         EXAMPLES\n\n\
         \x20 plotexpr sample x ^ 2 - 2 * x\n\
         \x20 plotexpr sample --from -3.14 --to 3.14 --step 0.1 'sin( x ) * PI'\n\
         \x20 plotexpr rpn 3.576 '*' '(' x - x ^ 2 ')'\n\
         \x20 plotexpr eval --x 3 x + 2\n\
         \x20 plotexpr sample --to 2 -- -2 * x\n\n\
         Options go before the expression. Every argument after the first\n\
         expression token is read as part of the expression, so\n\
         `plotexpr sample x ^ 2 --from 1` fails on the token '--from'.\n\
         A lone -- ends the options explicitly.\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_lists_tables() {
        let overview = get_symbols_overview();
        assert!(overview.contains("PI"));
        assert!(overview.contains("tan(    (alias of tg()"));
        assert!(overview.contains("^       4           right"));
    }

    #[test]
    fn test_overview_explains_option_order() {
        let overview = get_symbols_overview();
        assert!(overview.contains("Options go before the expression"));
        assert!(overview.contains("sample --to 2 -- -2 * x"));
    }
}
