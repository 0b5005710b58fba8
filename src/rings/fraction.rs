use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Float, FromPrimitive, One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

/// Exact rational number, always stored reduced with a positive denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn from_integer(value: i64) -> Self {
        Self {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl FromStr for Fraction {
    type Err = String;

    /// Parses `"num/den"` or a plain integer.
    fn from_str(s: &str) -> Result<Self, String> {
        let mut nums = s.split('/');
        let num = nums.next().ok_or("No number")?.trim();
        let den = nums.next().unwrap_or("1").trim();
        if nums.next().is_some() {
            return Err("Too many '/'".into());
        }

        let num = BigInt::parse_bytes(num.as_bytes(), 10).ok_or("Invalid number")?;
        let den = BigInt::parse_bytes(den.as_bytes(), 10).ok_or("Invalid number")?;
        if den.is_zero() {
            return Err("Denominator cannot be zero".into());
        }
        Ok(Fraction::new(num, den))
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + Fraction {
            num: -rhs.num,
            den: rhs.den,
        }
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from_integer(1)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        (&self.num / &self.den).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        (&self.num / &self.den).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.num.to_f64()? / self.den.to_f64()?)
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Fraction> {
        Some(Fraction::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Fraction> {
        Some(Fraction::new(BigInt::from(n), BigInt::one()))
    }

    // exact: every finite f64 is mantissa * 2^exponent
    fn from_f64(n: f64) -> Option<Fraction> {
        if !n.is_finite() {
            return None;
        }

        let (mantissa, exponent, sign) = n.integer_decode();
        let mut num = BigInt::from(mantissa);
        if sign < 0 {
            num = -num;
        }

        if exponent >= 0 {
            Some(Fraction::new(num << exponent as usize, BigInt::one()))
        } else {
            Some(Fraction::new(num, BigInt::one() << (-exponent) as usize))
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{} / {}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl Eq for Fraction {}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
