//! a module turns a String expression into a symbolic expression
//!
//! # Example
//! ```rust, ignore
//! use RustedNewtonCotes::symbolic::symbolic_engine::Expr;
//! let input = "x^2 + sin(x)";
//! let parsed_expression = Expr::parse_expression(input);
//! println!(" parsed_expression {}", parsed_expression);
//! let f = parsed_expression.lambdify1D();
//! println!("{}, f(2) = {}", input, f(2.0));
//! ```
//!
//! Grammar (precedence low to high):
//!   expr   := term (('+' | '-') term)*
//!   term   := unary (('*' | '/') unary)*
//!   unary  := '-' unary | power
//!   power  := atom ('^' unary)?          (right-associative)
//!   atom   := number | ident | ident '(' expr ')' | '(' expr ')'

use crate::symbolic::symbolic_engine::Expr;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\n' => {
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // scientific notation: 1e-6, 2.5E3
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let num_str: String = chars[start..i].iter().collect();
                let value = num_str
                    .parse::<f64>()
                    .map_err(|_| format!("invalid number literal: {}", num_str))?;
                tokens.push(Token::Number(value));
            }
            _ if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_alphanumeric() || chars[i] == '_')
                {
                    i += 1;
                }
                let ident: String = chars[start..i].iter().collect();
                tokens.push(Token::Ident(ident));
            }
            _ => return Err(format!("unexpected character '{}' in expression", c)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), String> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(format!("expected {:?}, found {:?}", expected, token)),
            None => Err(format!("expected {:?}, found end of input", expected)),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, String> {
        let mut lhs = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.next();
                    let rhs = self.parse_term()?;
                    lhs = lhs + rhs;
                }
                Some(Token::Minus) => {
                    self.next();
                    let rhs = self.parse_term()?;
                    lhs = lhs - rhs;
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, String> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.next();
                    let rhs = self.parse_unary()?;
                    lhs = lhs * rhs;
                }
                Some(Token::Slash) => {
                    self.next();
                    let rhs = self.parse_unary()?;
                    lhs = lhs / rhs;
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, String> {
        if let Some(Token::Minus) = self.peek() {
            self.next();
            let inner = self.parse_unary()?;
            return Ok(Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(inner),
            ));
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Expr, String> {
        let base = self.parse_atom()?;
        if let Some(Token::Caret) = self.peek() {
            self.next();
            // right-associative: x^2^3 = x^(2^3)
            let exp = self.parse_unary()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exp)));
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Expr, String> {
        match self.next() {
            Some(Token::Number(value)) => Ok(Expr::Const(value)),
            Some(Token::Ident(name)) => {
                if let Some(Token::LParen) = self.peek() {
                    self.next();
                    let arg = self.parse_expr()?;
                    self.expect(Token::RParen)?;
                    let arg = Box::new(arg);
                    match name.as_str() {
                        "exp" => Ok(Expr::Exp(arg)),
                        "ln" | "log" => Ok(Expr::Ln(arg)),
                        "sin" => Ok(Expr::sin(arg)),
                        "cos" => Ok(Expr::cos(arg)),
                        "tg" | "tan" => Ok(Expr::tg(arg)),
                        "ctg" | "cot" => Ok(Expr::ctg(arg)),
                        _ => Err(format!("unknown function: {}", name)),
                    }
                } else {
                    Ok(Expr::Var(name))
                }
            }
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Some(token) => Err(format!("unexpected token {:?}", token)),
            None => Err("unexpected end of input".to_string()),
        }
    }
}

pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    let tokens = tokenize(input.trim())?;
    if tokens.is_empty() {
        return Err("empty expression".to_string());
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr()?;
    if parser.pos != parser.tokens.len() {
        return Err(format!(
            "trailing input after position {} in expression '{}'",
            parser.pos, input
        ));
    }
    Ok(expr)
}

impl Expr {
    /// Parses a mathematical expression from string representation.
    ///
    /// # Supported Syntax
    /// - Variables: x, y, var_name
    /// - Constants: 3.14, -2.5, 1e-6
    /// - Operators: +, -, *, /, ^
    /// - Functions: exp, ln (log), sin, cos, tg (tan), ctg (cot)
    /// - Parentheses for grouping
    ///
    /// # Panics
    /// Panics if the expression cannot be parsed (invalid syntax).
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 + 2*x + 1");
    /// ```
    pub fn parse_expression(input: &str) -> Expr {
        match parse_expression_func(input) {
            Ok(expr) => expr,
            Err(err) => panic!("failed to parse expression '{}': {}", input, err),
        }
    }
}
