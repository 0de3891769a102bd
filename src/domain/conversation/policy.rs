//! Policy Compiler.
//!
//! The dialogue engine's policy configuration is a YAML-like text blob. Two
//! of its lines matter here:
//!
//! ```text
//! fallback_trigger: 0.40
//! disambiguation_trigger: '$0 < 2 * $1'
//! ```
//!
//! `$N` stands for the N-th ranked intent confidence. The trigger
//! expression is compiled once into a small AST: operands are numeric
//! literals and `$N` placeholders, `*` binds tighter than `<`, and `<` may
//! be chained (`a < b < c` means `a < b` and `b < c`). Anything outside this
//! grammar compiles to a predicate that never fires.

use tracing::warn;

const DISAMBIGUATION_KEY: &str = "disambiguation_trigger";
const FALLBACK_KEY: &str = "fallback_trigger";

/// Compiled confidence predicates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolicyFilters {
    disambiguation: Option<Comparison>,
    fallback_threshold: f64,
}

impl PolicyFilters {
    /// Compiles the policy text; a missing blob yields filters that never fire.
    pub fn compile(policy_text: Option<&str>) -> Self {
        let lines: Vec<&str> = policy_text
            .map(|text| text.split('\n').map(str::trim).collect())
            .unwrap_or_default();

        let disambiguation = match key_value(&lines, DISAMBIGUATION_KEY) {
            Some(value) => {
                let compiled = Comparison::parse(&value.replace('\'', ""));
                if compiled.is_none() {
                    warn!(expression = %value, "Unsupported disambiguation trigger, disabling it");
                }
                compiled
            }
            None => None,
        };

        let fallback_threshold = match key_value(&lines, FALLBACK_KEY) {
            Some(value) => {
                let raw = value.replace('\'', "");
                raw.trim().parse::<f64>().unwrap_or_else(|_| {
                    warn!(threshold = %raw, "Unparseable fallback trigger, using 0");
                    0.0
                })
            }
            None => 0.0,
        };

        Self {
            disambiguation,
            fallback_threshold,
        }
    }

    /// True if the ranking is ambiguous enough to ask the user.
    pub fn disambiguate(&self, confidences: &[f64]) -> bool {
        self.disambiguation
            .as_ref()
            .is_some_and(|expr| expr.evaluate(confidences))
    }

    /// True if the top confidence is below the fallback threshold.
    pub fn fallback(&self, confidences: &[f64]) -> bool {
        confidences
            .first()
            .is_some_and(|top| *top < self.fallback_threshold)
    }

    pub fn fallback_threshold(&self) -> f64 {
        self.fallback_threshold
    }
}

/// Value of the first line mentioning `key`, if it splits into exactly
/// two parts on `": "`.
fn key_value<'a>(lines: &[&'a str], key: &str) -> Option<&'a str> {
    let line: &'a str = lines.iter().copied().find(|line| line.contains(key))?;
    let parts: Vec<&'a str> = line.split(": ").collect();
    match parts.as_slice() {
        [_, value] => Some(*value),
        _ => {
            warn!(line = %line, "Malformed policy line");
            None
        }
    }
}

// === Expression AST ===

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operand {
    Number(f64),
    Confidence(usize),
}

impl Operand {
    fn value(&self, confidences: &[f64]) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(*n),
            Operand::Confidence(ix) => confidences.get(*ix).copied(),
        }
    }
}

/// Operands multiplied together.
#[derive(Debug, Clone, PartialEq)]
struct Product(Vec<Operand>);

impl Product {
    fn value(&self, confidences: &[f64]) -> Option<f64> {
        self.0
            .iter()
            .try_fold(1.0, |acc, op| op.value(confidences).map(|v| acc * v))
    }
}

/// A chain of at least two products joined by `<`.
#[derive(Debug, Clone, PartialEq)]
struct Comparison(Vec<Product>);

impl Comparison {
    fn parse(source: &str) -> Option<Self> {
        let tokens = tokenize(source)?;
        let mut products = Vec::new();
        let mut current = Vec::new();
        let mut expect_operand = true;

        for token in tokens {
            match (token, expect_operand) {
                (Token::Operand(op), true) => {
                    current.push(op);
                    expect_operand = false;
                }
                (Token::Times, false) => expect_operand = true,
                (Token::Less, false) => {
                    products.push(Product(std::mem::take(&mut current)));
                    expect_operand = true;
                }
                _ => return None,
            }
        }
        if expect_operand {
            return None;
        }
        products.push(Product(current));

        if products.len() < 2 {
            return None;
        }
        Some(Self(products))
    }

    /// Placeholders beyond the ranking length make the predicate false.
    fn evaluate(&self, confidences: &[f64]) -> bool {
        let values: Option<Vec<f64>> = self.0.iter().map(|p| p.value(confidences)).collect();
        match values {
            Some(values) => values.windows(2).all(|pair| pair[0] < pair[1]),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Operand(Operand),
    Times,
    Less,
}

fn tokenize(source: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '*' => {
                tokens.push(Token::Times);
                i += 1;
            }
            '<' => {
                tokens.push(Token::Less);
                i += 1;
            }
            '$' => {
                let start = i + 1;
                let end = scan_while(&chars, start, |c| c.is_ascii_digit());
                if end == start {
                    return None;
                }
                let ix: usize = chars[start..end].iter().collect::<String>().parse().ok()?;
                tokens.push(Token::Operand(Operand::Confidence(ix)));
                i = end;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let end = scan_while(&chars, i, |c| c.is_ascii_digit() || c == '.');
                let n: f64 = chars[i..end].iter().collect::<String>().parse().ok()?;
                tokens.push(Token::Operand(Operand::Number(n)));
                i = end;
            }
            _ => return None,
        }
    }
    Some(tokens)
}

fn scan_while(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while end < chars.len() && pred(chars[end]) {
        end += 1;
    }
    end
}
