//! CLI command handlers
//!
//! The run logic lives apart from main.rs so the whole sequence can be
//! driven against an in-memory reader in unit tests.

use std::io::{self, Read};
use std::process::ExitCode;

use colored::Colorize;
use tracing::warn;

use crate::cli::Cli;
use crate::error::SumError;
use crate::operands::Operands;
use crate::scan::{scan_args, scan_stdin};

/// Outcome of a full run, before mapping to a process exit code.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Both operands resolved; the sum was printed.
    Summed(f64),
    /// A malformed argument token, or unresolved operands after both
    /// sources were consulted.
    InputError,
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Summed(_) => ExitCode::SUCCESS,
            RunOutcome::InputError => ExitCode::from(1),
        }
    }
}

/// Run the sum against the process's real stdin.
pub fn run_sum(cli: &Cli) -> RunOutcome {
    run_sum_with(cli, io::stdin().lock())
}

/// Run the sum, resolving operands from the argument tokens first and from
/// `stdin` only if an operand is still unset afterwards.
pub fn run_sum_with<R: Read>(cli: &Cli, stdin: R) -> RunOutcome {
    println!("{}", "Inicio".bold());
    println!("Programa para sumar dos números\n");

    let mut operands = Operands::new();

    // Argument phase: fatal on the first malformed token.
    if let Err(err) = scan_args(&cli.tokens, &mut operands) {
        println!("{}", err.to_string().red());
        return RunOutcome::InputError;
    }

    // Arguments alone may already resolve both operands; stdin is never
    // consulted in that case and the trailer is skipped.
    if let Some(result) = operands.sum() {
        println!("Resultado de la suma: {result}");
        return RunOutcome::Summed(result);
    }

    // Stdin phase: lenient. The first malformed token abandons the rest of
    // the stream but keeps whatever operands were already set.
    if let Err(err) = scan_stdin(stdin, &mut operands) {
        warn!(error = %err, "stdin scan abandoned");
        println!("{}", "Error al leer los números desde STDIN".red());
    }

    match operands.sum() {
        Some(result) => {
            println!("Resultado de la suma: {result}");
            println!("\n\nFin del programa");
            RunOutcome::Summed(result)
        }
        None => {
            println!("{}", SumError::MissingOperands.to_string().red());
            RunOutcome::InputError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["sumador"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_sums_from_arguments_alone() {
        let outcome = run_sum_with(&cli(&["num1=2.5", "num2=4"]), Cursor::new(""));
        assert_eq!(outcome, RunOutcome::Summed(6.5));
    }

    #[test]
    fn test_run_argument_order_does_not_matter() {
        let outcome = run_sum_with(&cli(&["num2=4", "num1=2.5"]), Cursor::new(""));
        assert_eq!(outcome, RunOutcome::Summed(6.5));
    }

    #[test]
    fn test_run_last_write_wins() {
        let outcome = run_sum_with(&cli(&["num1=1", "num1=2", "num2=3"]), Cursor::new(""));
        assert_eq!(outcome, RunOutcome::Summed(5.0));
    }

    #[test]
    fn test_run_never_reads_stdin_when_arguments_complete() {
        struct PanickingReader;

        impl Read for PanickingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                panic!("stdin must not be read");
            }
        }

        let outcome = run_sum_with(&cli(&["num1=1", "num2=2"]), PanickingReader);
        assert_eq!(outcome, RunOutcome::Summed(3.0));
    }

    #[test]
    fn test_run_malformed_argument_is_fatal() {
        let outcome = run_sum_with(&cli(&["num1=abc", "num2=2"]), Cursor::new("num1=1"));
        assert_eq!(outcome, RunOutcome::InputError);
    }

    #[test]
    fn test_run_completes_missing_operand_from_stdin() {
        let outcome = run_sum_with(&cli(&["num1=5"]), Cursor::new("num2=7"));
        assert_eq!(outcome, RunOutcome::Summed(12.0));
    }

    #[test]
    fn test_run_resolves_both_operands_from_stdin() {
        let outcome = run_sum_with(&cli(&[]), Cursor::new("num1=1.5 num2=2.5"));
        assert_eq!(outcome, RunOutcome::Summed(4.0));
    }

    #[test]
    fn test_run_missing_operands_is_an_input_error() {
        let outcome = run_sum_with(&cli(&[]), Cursor::new(""));
        assert_eq!(outcome, RunOutcome::InputError);
    }

    #[test]
    fn test_run_stdin_parse_failure_keeps_partial_operands() {
        // num2 is resolved before the malformed token; the run still
        // completes.
        let outcome = run_sum_with(&cli(&["num1=5"]), Cursor::new("num2=7 garbage"));
        assert_eq!(outcome, RunOutcome::Summed(12.0));
    }

    #[test]
    fn test_run_stdin_parse_failure_with_unresolved_operand_fails() {
        let outcome = run_sum_with(&cli(&["num1=5"]), Cursor::new("num2=bad"));
        assert_eq!(outcome, RunOutcome::InputError);
    }

    #[test]
    fn test_run_unrecognized_argument_key_is_ignored() {
        let outcome = run_sum_with(&cli(&["num1=1", "num2=2", "foo=bar"]), Cursor::new(""));
        assert_eq!(outcome, RunOutcome::Summed(3.0));
    }

    #[test]
    fn test_outcome_maps_to_exit_codes() {
        // ExitCode has no PartialEq; compare its Debug rendering.
        let success: ExitCode = RunOutcome::Summed(3.0).into();
        let failure: ExitCode = RunOutcome::InputError.into();
        assert_eq!(format!("{success:?}"), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(format!("{failure:?}"), format!("{:?}", ExitCode::from(1)));
    }
}
