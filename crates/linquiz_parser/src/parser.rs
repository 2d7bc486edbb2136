use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, digit1, multispace0},
    combinator::opt,
    multi::fold_many0,
    sequence::{pair, preceded},
    IResult,
};

use crate::error::ParseError;

/// One signed term as written: `coef * var ^ power`.
///
/// Constants have `var == None` and `power == 0`. The parser does not judge
/// whether the term is linear; that is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monomial {
    pub coef: i64,
    pub var: Option<String>,
    pub power: u32,
}

impl Monomial {
    pub fn constant(coef: i64) -> Self {
        Self {
            coef,
            var: None,
            power: 0,
        }
    }

    pub fn term(coef: i64, var: &str, power: u32) -> Self {
        Self {
            coef,
            var: Some(var.to_string()),
            power,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEquation {
    pub lhs: Vec<Monomial>,
    pub rhs: Vec<Monomial>,
}

// Borrowed pieces of a term before integer conversion, so overflow can be
// reported as its own error instead of a generic syntax failure.
#[derive(Debug, Clone, Copy)]
struct RawTerm<'a> {
    negative: bool,
    coef: Option<&'a str>,
    var: Option<&'a str>,
    power: Option<&'a str>,
}

fn parse_digits(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, digit1)(input)
}

fn parse_identifier(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, alpha1)(input)
}

fn parse_power(input: &str) -> IResult<&str, &str> {
    preceded(preceded(multispace0, tag("^")), parse_digits)(input)
}

// Term: 3, x, 3x, 3*x, x^2, 4x^2
fn parse_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    let (input, coef) = opt(parse_digits)(input)?;

    let (input, var) = if coef.is_some() {
        // Implicit (2x) or explicit (2*x) multiplication
        opt(preceded(
            opt(preceded(multispace0, alt((tag("*"), tag("·"))))),
            parse_identifier,
        ))(input)?
    } else {
        let (input, ident) = parse_identifier(input)?;
        (input, Some(ident))
    };

    let (input, power) = if var.is_some() {
        opt(parse_power)(input)?
    } else {
        (input, None)
    };

    Ok((
        input,
        RawTerm {
            negative: false,
            coef,
            var,
            power,
        },
    ))
}

// Side: optional leading minus, then terms joined by + or -
fn parse_side(input: &str) -> IResult<&str, Vec<RawTerm<'_>>> {
    let (input, leading_minus) = opt(preceded(multispace0, tag("-")))(input)?;
    let (input, first) = parse_term(input)?;
    let first = RawTerm {
        negative: leading_minus.is_some(),
        ..first
    };

    fold_many0(
        pair(preceded(multispace0, alt((tag("+"), tag("-")))), parse_term),
        move || vec![first],
        |mut acc, (op, term)| {
            acc.push(RawTerm {
                negative: op == "-",
                ..term
            });
            acc
        },
    )(input)
}

fn parse_sides(input: &str) -> IResult<&str, (Vec<RawTerm<'_>>, Vec<RawTerm<'_>>)> {
    let (input, lhs) = parse_side(input)?;
    let (input, _) = preceded(multispace0, tag("="))(input)?;
    let (input, rhs) = parse_side(input)?;
    Ok((input, (lhs, rhs)))
}

fn lower_term(raw: RawTerm<'_>) -> Result<Monomial, ParseError> {
    let magnitude = match raw.coef {
        Some(digits) => digits
            .parse::<i64>()
            .map_err(|_| ParseError::IntegerOverflow(digits.to_string()))?,
        None => 1,
    };
    let coef = if raw.negative { -magnitude } else { magnitude };

    match raw.var {
        None => Ok(Monomial::constant(coef)),
        Some(var) => {
            let power = match raw.power {
                Some(digits) => digits
                    .parse::<u32>()
                    .map_err(|_| ParseError::IntegerOverflow(digits.to_string()))?,
                None => 1,
            };
            Ok(Monomial::term(coef, var, power))
        }
    }
}

fn lower_side(raw: Vec<RawTerm<'_>>) -> Result<Vec<Monomial>, ParseError> {
    raw.into_iter().map(lower_term).collect()
}

/// Parses `lhs = rhs` where each side is a sum of integer monomials.
pub fn parse_equation(input: &str) -> Result<ParsedEquation, ParseError> {
    if !input.contains('=') {
        return Err(ParseError::MissingRelation);
    }

    let (remaining, (lhs, rhs)) =
        parse_sides(input).map_err(|e| ParseError::NomError(format!("{}", e)))?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }

    Ok(ParsedEquation {
        lhs: lower_side(lhs)?,
        rhs: lower_side(rhs)?,
    })
}
