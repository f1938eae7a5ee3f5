//! LIFO stacks and stack-driven algorithms.

use crate::error::{AlgoError, Result};
use std::io::{self, Write};
use tracing::instrument;

/// Vec-backed LIFO stack.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Stack that also reports its minimum in O(1).
///
/// Each slot stores the value together with the minimum of everything at or
/// below it.
#[derive(Debug, Clone)]
pub struct MinStack<T> {
    items: Vec<(T, T)>,
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        let min = match self.items.last() {
            Some((_, min)) if *min < item => min.clone(),
            _ => item.clone(),
        };
        self.items.push((item, min));
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop().map(|(item, _)| item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last().map(|(item, _)| item)
    }

    pub fn min(&self) -> Option<&T> {
        self.items.last().map(|(_, min)| min)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Checks that `()`, `[]` and `{}` nest correctly. Other characters are ignored.
pub fn is_balanced(text: &str) -> bool {
    let mut open = Stack::new();
    for ch in text.chars() {
        match ch {
            '(' | '[' | '{' => open.push(ch),
            ')' | ']' | '}' => {
                let expected = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if open.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

/// Evaluates a whitespace-separated postfix expression over `+ - * /`.
///
/// Division truncates toward zero.
///
/// ```
/// use classic_algos::stack::eval_postfix;
///
/// assert_eq!(eval_postfix("2 3 1 * + 9 -"), Ok(-4));
/// assert!(eval_postfix("1 +").is_err());
/// ```
pub fn eval_postfix(expr: &str) -> Result<i64> {
    let mut operands: Stack<i64> = Stack::new();
    for token in expr.split_whitespace() {
        if let Ok(value) = token.parse::<i64>() {
            operands.push(value);
            continue;
        }

        let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
            return Err(AlgoError::InvalidExpression(format!(
                "operator '{token}' is missing an operand"
            )));
        };
        let value = match token {
            "+" => lhs.checked_add(rhs),
            "-" => lhs.checked_sub(rhs),
            "*" => lhs.checked_mul(rhs),
            "/" if rhs == 0 => {
                return Err(AlgoError::InvalidExpression("division by zero".into()));
            }
            "/" => lhs.checked_div(rhs),
            other => {
                return Err(AlgoError::InvalidExpression(format!(
                    "unknown token '{other}'"
                )));
            }
        };
        let value = value.ok_or_else(|| AlgoError::InvalidExpression("overflow".into()))?;
        operands.push(value);
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(result), true) => Ok(result),
        (None, _) => Err(AlgoError::InvalidExpression("empty expression".into())),
        (Some(_), false) => Err(AlgoError::InvalidExpression("too many operands".into())),
    }
}

fn precedence(op: char) -> u8 {
    match op {
        '^' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

/// Converts an infix expression with single-character operands to postfix
/// (shunting yard). `^` is right associative; the other operators are left
/// associative. Whitespace is skipped.
pub fn infix_to_postfix(expr: &str) -> Result<String> {
    let mut output = String::with_capacity(expr.len());
    let mut ops: Stack<char> = Stack::new();

    for ch in expr.chars().filter(|c| !c.is_whitespace()) {
        match ch {
            c if c.is_ascii_alphanumeric() => output.push(c),
            '(' => ops.push(ch),
            ')' => loop {
                match ops.pop() {
                    Some('(') => break,
                    Some(op) => output.push(op),
                    None => {
                        return Err(AlgoError::InvalidExpression("unmatched ')'".into()));
                    }
                }
            },
            '+' | '-' | '*' | '/' | '^' => {
                while let Some(&top) = ops.peek() {
                    let pops = top != '('
                        && (precedence(top) > precedence(ch)
                            || (precedence(top) == precedence(ch) && ch != '^'));
                    if !pops {
                        break;
                    }
                    output.push(top);
                    ops.pop();
                }
                ops.push(ch);
            }
            other => {
                return Err(AlgoError::InvalidExpression(format!(
                    "unexpected character '{other}'"
                )));
            }
        }
    }

    while let Some(op) = ops.pop() {
        if op == '(' {
            return Err(AlgoError::InvalidExpression("unmatched '('".into()));
        }
        output.push(op);
    }
    Ok(output)
}

/// For each element, the first later element that is strictly greater.
pub fn next_greater_elements<T: Ord + Clone>(data: &[T]) -> Vec<Option<T>> {
    let mut result = vec![None; data.len()];
    // Indices still waiting for a greater element, values decreasing upward.
    let mut waiting: Stack<usize> = Stack::new();
    for (i, value) in data.iter().enumerate() {
        while let Some(&top) = waiting.peek() {
            if data[top] >= *value {
                break;
            }
            result[top] = Some(value.clone());
            waiting.pop();
        }
        waiting.push(i);
    }
    result
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let mut stack = Stack::new();
    for v in [1, 2, 3] {
        stack.push(v);
    }
    writeln!(out, "peek after pushing 1, 2, 3: {:?}", stack.peek())?;
    let popped = stack.pop();
    writeln!(out, "pop: {popped:?}, len now {}", stack.len())?;

    let mut mins = MinStack::new();
    for v in [5, 3, 7, 2, 8] {
        mins.push(v);
    }
    writeln!(out, "min of [5, 3, 7, 2, 8]: {:?}", mins.min())?;
    mins.pop();
    mins.pop();
    writeln!(out, "min after two pops:     {:?}", mins.min())?;

    for text in ["{[()()]}", "([)]", "(("] {
        writeln!(out, "balanced {text:<10} {}", is_balanced(text))?;
    }

    let postfix = "2 3 1 * + 9 -";
    writeln!(out, "eval '{postfix}': {:?}", eval_postfix(postfix))?;
    match eval_postfix("4 0 /") {
        Ok(v) => writeln!(out, "eval '4 0 /': {v}")?,
        Err(e) => writeln!(out, "eval '4 0 /': error: {e}")?,
    }

    let infix = "a+b*(c^d-e)^(f+g*h)-i";
    writeln!(out, "infix {infix} -> {:?}", infix_to_postfix(infix))?;
    writeln!(
        out,
        "next greater of [4, 5, 2, 25]: {:?}",
        next_greater_elements(&[4, 5, 2, 25])
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_lifo() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push('a');
        stack.push('b');
        assert_eq!(stack.peek(), Some(&'b'));
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_min_stack() {
        let mut stack = MinStack::new();
        assert_eq!(stack.min(), None);
        for v in [5, 3, 7, 3, 8] {
            stack.push(v);
        }
        assert_eq!(stack.min(), Some(&3));
        stack.pop();
        stack.pop();
        assert_eq!(stack.min(), Some(&3));
        stack.pop();
        stack.pop();
        assert_eq!(stack.min(), Some(&5));
        assert_eq!(stack.peek(), Some(&5));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_balanced() {
        assert!(is_balanced("{[()()]}"));
        assert!(is_balanced("fn main() { let v = [1]; }"));
        assert!(is_balanced(""));
        assert!(!is_balanced("([)]"));
        assert!(!is_balanced("(("));
        assert!(!is_balanced(")"));
    }

    #[test]
    fn test_postfix() {
        assert_eq!(eval_postfix("2 3 1 * + 9 -"), Ok(-4));
        assert_eq!(eval_postfix("7 -2 /"), Ok(-3));
        assert!(matches!(
            eval_postfix("4 0 /"),
            Err(AlgoError::InvalidExpression(_))
        ));
        assert!(eval_postfix("").is_err());
        assert!(eval_postfix("1 2").is_err());
        assert!(eval_postfix("1 2 %").is_err());
    }

    #[test]
    fn test_infix() {
        assert_eq!(infix_to_postfix("a+b*c").unwrap(), "abc*+");
        assert_eq!(infix_to_postfix("(a+b)*c").unwrap(), "ab+c*");
        assert_eq!(infix_to_postfix("a-b-c").unwrap(), "ab-c-");
        assert_eq!(infix_to_postfix("a^b^c").unwrap(), "abc^^");
        assert_eq!(
            infix_to_postfix("a+b*(c^d-e)^(f+g*h)-i").unwrap(),
            "abcd^e-fgh*+^*+i-"
        );
        assert!(infix_to_postfix("(a+b").is_err());
        assert!(infix_to_postfix("a+b)").is_err());
    }

    #[test]
    fn test_next_greater() {
        assert_eq!(
            next_greater_elements(&[4, 5, 2, 25]),
            vec![Some(5), Some(25), Some(25), None]
        );
        assert_eq!(next_greater_elements(&[3, 3, 1]), vec![None, None, None]);
    }
}
