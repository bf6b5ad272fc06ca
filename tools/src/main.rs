use clap::Parser;
use log::{info, LevelFilter};
use shunting::ShuntingParser;

/// Evaluate space separated infix arithmetic: + - * / and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the expression in reverse polish notation before its value.
    #[arg(long)]
    rpn: bool,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate, eg: ( 1 + 2 ) / 3. Starts a REPL when missing.
    /// Flags go before the expression, everything after its first word is
    /// taken as part of it.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, allow_negative_numbers = true)]
    expression: Vec<String>,
}

fn outcome(expr: &str, show_rpn: bool) -> Vec<String> {
    if expr.is_empty() {
        return vec![format!("Unknown expression")];
    }
    let mut lines = Vec::new();
    let rpn = ShuntingParser::parse_str(expr);
    if show_rpn {
        lines.push(format!("RPN: {}", rpn));
    }
    match rpn.eval() {
        Ok(result) => lines.push(format!("Result: {}", result)),
        Err(e) => lines.push(format!("Error: {}", e)),
    }
    lines
}

fn repl(show_rpn: bool) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let histpath = home::home_dir().map(|h| h.join(".calc_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            info!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                for out in outcome(line, show_rpn) {
                    println!("{}", out);
                }
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(level)
        .init();

    if args.expression.is_empty() {
        return repl(args.rpn);
    }
    for out in outcome(&args.expression.join(" "), args.rpn) {
        println!("{}", out);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{outcome, Args};
    use clap::Parser;

    #[test]
    fn results_and_errors() {
        assert_eq!(outcome("( 1 + 2 ) / 3", false), vec!["Result: 1"]);
        assert_eq!(outcome("5.2 / 0", false), vec!["Result: inf"]);
        assert_eq!(outcome("1 +", false), vec!["Error: Invalid expression"]);
        assert_eq!(outcome("", false), vec!["Unknown expression"]);
    }

    #[test]
    fn shows_rpn() {
        assert_eq!(
            outcome("( 1 + 5 + 6 ) / ( 3 * 2 )", true),
            vec!["RPN: 1 5 + 6 + 3 2 * /", "Result: 2"]
        );
    }

    #[test]
    fn parses_args() {
        let args = Args::parse_from(["calc", "--rpn", "-vv", "-5.2", "/", "0"]);
        assert!(args.rpn);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.expression.join(" "), "-5.2 / 0");

        // flags after the expression are part of it
        let args = Args::parse_from(["calc", "1", "+", "2", "-v"]);
        assert_eq!(args.verbose, 0);
        assert_eq!(args.expression.join(" "), "1 + 2 -v");
        assert_eq!(outcome(&args.expression.join(" "), false), vec!["Error: Invalid expression"]);

        let args = Args::parse_from(["calc", "( 1 + 2 ) / 3"]);
        assert_eq!(args.expression, vec!["( 1 + 2 ) / 3"]);
        assert!(!args.rpn);
    }
}
