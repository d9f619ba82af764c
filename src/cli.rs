use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sumador",
    version,
    about = "Sums two named operands (num1, num2) taken from arguments or stdin",
    long_about = "sumador resolves the operands num1 and num2 from `key=value` tokens, \
consulting the argument list first and falling back to stdin for whatever is \
still unset, then prints their sum. The whole run is bounded by a wall-clock \
timeout."
)]
pub struct Cli {
    /// Operand tokens in `key=value` form (e.g. `num1=3.5`); keys other
    /// than num1/num2 are ignored
    pub tokens: Vec<String>,

    /// Wall-clock limit in seconds for the whole run
    #[arg(
        long,
        env = "SUMADOR_TIMEOUT",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Verbose logging (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging entirely
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
