//! Text listing parser
//!
//! A listing is a flat sequence of tokens:
//!
//! - tokens are separated by whitespace, `,`, `;`, `[` or `]`
//! - `//` and `#` start a comment that runs to the end of the line
//! - numbers may be decimal (`10`, `-29`, `2.5`, `1e3`) or hexadecimal
//!   (`0x0A`, `-0x1d`)
//! - mnemonics (`PUSH`, `add`, ...) are replaced by their opcode
//! - anything else is kept as a [`Value::Label`] placeholder
//!
//! ```
//! use bytecode_system::{listing, Program};
//!
//! let program = listing::parse("PUSH 2; PUSH 3; ADD; OUT  // prints 5");
//! assert_eq!(program, Program::from_numbers([0x01, 2, 0x01, 3, 0x10, 0x0F]));
//! ```

use crate::opcode::Opcode;
use crate::program::Program;
use crate::value::Value;
use core_types::Number;

/// Parse a listing into a program
pub fn parse(source: &str) -> Program {
    source
        .lines()
        .map(strip_comment)
        .flat_map(|line| line.split(is_separator))
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '[' | ']')
}

fn parse_token(token: &str) -> Value {
    if let Some(op) = Opcode::from_mnemonic(token) {
        return Value::from(op);
    }
    match parse_number(token) {
        Some(n) => Value::Number(n),
        None => Value::Label(token.to_string()),
    }
}

/// Parse a numeric literal
///
/// Literals must be finite: spelled-out `inf` and `NaN` are not numbers in
/// a listing, and neither is an exponent that overflows, such as `1e400`.
pub fn parse_number(token: &str) -> Option<Number> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let magnitude = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok()? as f64,
        None => {
            if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return None;
            }
            body.parse::<f64>().ok().filter(|value| value.is_finite())?
        }
    };

    Some(Number::new(if negative { -magnitude } else { magnitude }))
}
