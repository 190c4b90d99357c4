use clap::{Args, Parser as ClapParser, Subcommand};
use plotexpr::OutputFormat;
use plotexpr::cli::{
    self, CliError, EvalOptions, RpnOptions, SampleOptions, tokens_from_args,
};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "plotexpr")]
#[command(about = "plotexpr - Sample a single-variable expression over a range for plotting")]
#[command(version)]
#[command(after_help = "Options go before the expression: plotexpr sample --from 1 x ^ 2")]
struct Cli {
    /// Log parsing and sampling details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also log every skipped sample point
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Expression {
    /// Expression tokens, e.g. `sin( x ^ 2 )` (reads stdin if omitted).
    /// Must come after all options; use `--` when it starts with `-`.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    tokens: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample the expression over [from, to)
    Sample {
        #[command(flatten)]
        expression: Expression,

        /// Range start
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f64,

        /// Range end (exclusive)
        #[arg(long, default_value_t = 6.5, allow_negative_numbers = true)]
        to: f64,

        /// Distance between sample points
        #[arg(long, default_value_t = 0.01)]
        step: f64,

        /// Divisors below this magnitude leave a point undefined
        #[arg(long, default_value_t = plotexpr::DEFAULT_DIVISION_THRESHOLD)]
        min_divisor: f64,

        /// Output format: csv or json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Round printed values to this many decimal places
        #[arg(short, long)]
        precision: Option<u32>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the postfix (RPN) form of the expression
    Rpn {
        #[command(flatten)]
        expression: Expression,

        /// Output format: csv (space-joined) or json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },

    /// Evaluate the expression at a single point
    Eval {
        #[command(flatten)]
        expression: Expression,

        /// Variable value
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Divisors below this magnitude leave the point undefined
        #[arg(long, default_value_t = plotexpr::DEFAULT_DIVISION_THRESHOLD)]
        min_divisor: f64,

        /// Round the result to this many decimal places
        #[arg(short, long)]
        precision: Option<u32>,
    },

    /// List recognized variables, constants, operators and functions
    Symbols,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::init_logger(cli.verbose, cli.trace) {
        eprintln!("{}", e);
    }

    let result = match cli.command {
        Commands::Sample {
            expression,
            from,
            to,
            step,
            min_divisor,
            format,
            precision,
            pretty,
        } => read_tokens(expression).and_then(|tokens| {
            let options = SampleOptions {
                tokens,
                from,
                to,
                step,
                min_divisor,
                format: parse_format(&format)?,
                precision,
                pretty,
            };
            cli::execute_sample(&options)
        }),
        Commands::Rpn { expression, format } => read_tokens(expression).and_then(|tokens| {
            let options = RpnOptions {
                tokens,
                format: parse_format(&format)?,
            };
            cli::execute_rpn(&options)
        }),
        Commands::Eval {
            expression,
            x,
            min_divisor,
            precision,
        } => read_tokens(expression).and_then(|tokens| {
            let options = EvalOptions {
                tokens,
                x,
                min_divisor,
                precision,
            };
            cli::execute_eval(&options)
        }),
        Commands::Symbols => Ok(cli::get_symbols_overview()),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn parse_format(name: &str) -> Result<OutputFormat, CliError> {
    OutputFormat::from_name(name).ok_or_else(|| CliError::UnknownFormat(name.to_string()))
}

fn read_tokens(expression: Expression) -> Result<Vec<String>, CliError> {
    if !expression.tokens.is_empty() {
        return tokens_from_args(&expression.tokens);
    }
    if atty::is(atty::Stream::Stdin) {
        return Err(CliError::NoInput);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
    tokens_from_args(&[buffer])
}
