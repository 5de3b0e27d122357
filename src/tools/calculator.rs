//! Reference tool: a validating arithmetic evaluator
//!
//! The original hazard this crate exists to surface is a client that feeds
//! server-supplied argument text straight into a general-purpose evaluator.
//! This tool is the re-architected version: the expression is parsed by a
//! closed grammar (numbers, `+ - * /`, unary minus, parentheses) and
//! anything outside it — identifiers, quotes, calls, whatever — is rejected
//! before evaluation starts. There is no path from the payload to code.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;
use crate::{Error, Result};

/// Evaluates a mathematical expression given as text.
pub struct Calculator;

#[async_trait]
impl Tool for Calculator {
    fn name(&self) -> &str {
        "use_calculator"
    }

    fn description(&self) -> &str {
        "Evaluate a math expression"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "expression": { "type": "string" }
            },
            "required": ["expression"]
        })
    }

    async fn invoke(&self, arguments: Value) -> Result<Value> {
        let expression = arguments
            .get("expression")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                Error::evaluation("arguments must carry a string field 'expression'")
            })?;

        let value = evaluate(expression)?;
        Ok(json!({ "result": number_value(value) }))
    }
}

/// Keep integral results as integers so `2+2` reads back as `4`, not `4.0`.
fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

/// Nesting bound for parentheses and unary minus. The grammar recurses, and
/// the payload is untrusted: without a bound, a long run of `(` would
/// exhaust the stack instead of returning an error.
const MAX_DEPTH: usize = 64;

/// Evaluate an arithmetic expression, rejecting anything outside the
/// grammar.
pub fn evaluate(expression: &str) -> Result<f64> {
    let mut parser = Parser {
        input: expression.as_bytes(),
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    parser.skip_whitespace();
    if parser.pos < parser.input.len() {
        return Err(Error::evaluation(format!(
            "unexpected character {:?} at offset {}",
            parser.input[parser.pos] as char,
            parser.pos
        )));
    }
    if !value.is_finite() {
        return Err(Error::evaluation("expression result is not finite"));
    }
    Ok(value)
}

// expr   := term (('+' | '-') term)*
// term   := factor (('*' | '/') factor)*
// factor := '-' factor | number | '(' expr ')'
struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(Error::evaluation("division by zero"));
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64> {
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                self.enter()?;
                let value = -self.factor()?;
                self.depth -= 1;
                Ok(value)
            }
            Some(b'(') => {
                self.pos += 1;
                self.enter()?;
                let value = self.expr()?;
                self.depth -= 1;
                self.skip_whitespace();
                if self.input.get(self.pos) != Some(&b')') {
                    return Err(Error::evaluation("unbalanced parenthesis"));
                }
                self.pos += 1;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => self.number(),
            Some(c) => Err(Error::evaluation(format!(
                "unexpected character {:?} at offset {}",
                c as char, self.pos
            ))),
            None => Err(Error::evaluation("unexpected end of expression")),
        }
    }

    fn number(&mut self) -> Result<f64> {
        let start = self.pos;
        while let Some(&c) = self.input.get(self.pos) {
            if c.is_ascii_digit() || c == b'.' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let text = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or("");
        text.parse::<f64>()
            .map_err(|_| Error::evaluation(format!("invalid number {text:?}")))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::evaluation("expression too deeply nested"));
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.input.get(self.pos), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.input.get(self.pos).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn evaluates_simple_sum() {
        assert_eq!(evaluate("2+2").unwrap(), 4.0);
    }

    #[test]
    fn respects_precedence_and_parentheses() {
        assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(evaluate("-(1.5 + 0.5)").unwrap(), -2.0);
    }

    #[test]
    fn rejects_division_by_zero() {
        assert!(matches!(evaluate("1/0"), Err(Error::Evaluation { .. })));
    }

    #[test]
    fn rejects_code_shaped_payloads() {
        // The payload the original client would have executed.
        let err = evaluate("open('pwned.txt', 'w').write('owned')").unwrap_err();
        assert!(matches!(err, Error::Evaluation { .. }));

        for hostile in ["__import__('os')", "2+2; rm -rf /", "exec(x)", "a+b"] {
            assert!(matches!(
                evaluate(hostile),
                Err(Error::Evaluation { .. })
            ));
        }
    }

    #[test]
    fn deeply_nested_payload_is_rejected_not_crashed() {
        // A server-chosen payload of 200k nested parens must come back as a
        // rejection, not blow the stack.
        let hostile = format!("{}2{}", "(".repeat(200_000), ")".repeat(200_000));
        assert!(matches!(
            evaluate(&hostile),
            Err(Error::Evaluation { .. })
        ));

        // Unary minus recurses through the same path.
        let hostile = format!("{}2", "-".repeat(200_000));
        assert!(matches!(
            evaluate(&hostile),
            Err(Error::Evaluation { .. })
        ));

        // Reasonable nesting still evaluates.
        assert_eq!(evaluate("((((((2+2))))))").unwrap(), 4.0);
    }

    #[test]
    fn rejects_truncated_expressions() {
        assert!(evaluate("2+").is_err());
        assert!(evaluate("(2+2").is_err());
        assert!(evaluate("").is_err());
    }

    #[tokio::test]
    async fn invoke_wraps_result() {
        let out = Calculator
            .invoke(json!({"expression": "2+2"}))
            .await
            .unwrap();
        assert_eq!(out, json!({"result": 4}));
    }

    #[tokio::test]
    async fn invoke_requires_string_expression() {
        let err = Calculator.invoke(json!({"expression": 7})).await.unwrap_err();
        assert!(matches!(err, Error::Evaluation { .. }));
    }
}
