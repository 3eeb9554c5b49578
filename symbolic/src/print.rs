use std::fmt::{self, Display, Formatter, Write};

use crate::ex::{Ex, Node};
use crate::numeric::Numeric;

const ADD: u8 = 40;
const MUL: u8 = 50;
const POW: u8 = 60;
const ATOM: u8 = 70;

fn numeric_precedence(n: &Numeric) -> u8 {
    if n.is_negative() {
        ADD
    } else if !n.is_integer() {
        MUL
    } else {
        ATOM
    }
}

fn precedence(e: &Ex) -> u8 {
    match e.node() {
        Node::Num(n) => numeric_precedence(n),
        Node::Sym(_) | Node::Func(..) => ATOM,
        Node::Pow(..) => POW,
        Node::Mul(_, c) if c.is_negative() => ADD,
        Node::Mul(..) => MUL,
        Node::Add(..) => ADD,
    }
}

fn write_with(f: &mut Formatter<'_>, e: &Ex, parent: u8) -> fmt::Result {
    if precedence(e) < parent {
        f.write_char('(')?;
        write_bare(f, e)?;
        f.write_char(')')
    } else {
        write_bare(f, e)
    }
}

fn write_factor(f: &mut Formatter<'_>, base: &Ex, exp: &Ex) -> fmt::Result {
    if exp.is_one() {
        write_with(f, base, MUL + 1)
    } else {
        write_with(f, base, POW + 1)?;
        f.write_char('^')?;
        write_with(f, exp, POW + 1)
    }
}

// `coeff*rest` as it appears inside a product or as a term of a sum.
fn write_scaled(f: &mut Formatter<'_>, coeff: &Numeric, rest: &Ex) -> fmt::Result {
    if coeff.is_one() {
        write_with(f, rest, ADD)
    } else if *coeff == Numeric::MINUS_ONE {
        f.write_char('-')?;
        write_with(f, rest, MUL)
    } else {
        write!(f, "{}*", coeff)?;
        write_with(f, rest, MUL)
    }
}

fn write_bare(f: &mut Formatter<'_>, e: &Ex) -> fmt::Result {
    match e.node() {
        Node::Num(n) => write!(f, "{}", n),
        Node::Sym(s) => f.write_str(s.name()),
        Node::Func(func, arg) => write!(f, "{}({})", func.name(), arg),
        Node::Pow(base, exp) => write_factor(f, base, exp),
        Node::Mul(factors, coeff) => {
            if *coeff == Numeric::MINUS_ONE {
                f.write_char('-')?;
            } else if !coeff.is_one() {
                write!(f, "{}*", coeff)?;
            }
            for (i, (base, exp)) in factors.iter().enumerate() {
                if i > 0 {
                    f.write_char('*')?;
                }
                write_factor(f, base, exp)?;
            }
            Ok(())
        }
        Node::Add(terms, constant) => {
            let mut out = String::new();
            for (rest, k) in terms {
                let term = Scaled(k, rest).to_string();
                if !out.is_empty() && !term.starts_with('-') {
                    out.push('+');
                }
                out.push_str(&term);
            }
            if !constant.is_zero() {
                if !constant.is_negative() {
                    out.push('+');
                }
                write!(out, "{}", constant)?;
            }
            f.write_str(&out)
        }
    }
}

struct Scaled<'a>(&'a Numeric, &'a Ex);

impl Display for Scaled<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.0, self.1)
    }
}

impl Display for Ex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bare(f, self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Ex, Symbol};
    use rstest::rstest;

    fn xyz() -> (Symbol, Symbol, Symbol) {
        (Symbol::new("x"), Symbol::new("y"), Symbol::new("z"))
    }

    #[test]
    fn test_sample_expressions() {
        let (x, y, z) = xyz();
        assert_eq!((&x + 2 * &y).to_string(), "x+2*y");
        let e = (&x + 2 * &y).sin() + 3 * &z + 41;
        assert_eq!(e.to_string(), "3*z+sin(x+2*y)+41");
        assert_eq!((e + 1).to_string(), "3*z+sin(x+2*y)+42");
    }

    #[test]
    fn test_rational_function() {
        let (x, _, _) = xyz();
        let e = (&x + 1) / (&x - 1);
        assert_eq!(e.to_string(), "(x-1)^(-1)*(x+1)");
    }

    #[rstest]
    #[case(-3, "-3")]
    #[case(0, "0")]
    #[case(12, "12")]
    fn test_integers(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(Ex::from(n).to_string(), expected);
    }

    #[test]
    fn test_negative_terms_and_powers() {
        let (x, y, _) = xyz();
        assert_eq!((&x - &y).to_string(), "x-y");
        assert_eq!((&x - 2 * &y).to_string(), "x-2*y");
        assert_eq!((-(&x)).to_string(), "-x");
        assert_eq!(Ex::from(&x).pow(Ex::frac(1, 2).unwrap()).to_string(), "x^(1/2)");
        assert_eq!((1 / &x).to_string(), "x^(-1)");
        assert_eq!((&x + &y).pow(2).to_string(), "(x+y)^2");
        assert_eq!((&x - 5).to_string(), "x-5");
    }
}
