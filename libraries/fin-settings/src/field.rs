//! Settings form fields
//!
//! Form inputs address fields by their wire path: a bare key for top-level
//! fields (`"currency"`) or a dotted two-level path for nested ones
//! (`"interestRates.home"`). Paths are parsed once into [`SettingsField`] and
//! applied to a [`SettingsRecord`] without touching sibling fields.

use fin_core::{FinError, Result, SettingsRecord};
use std::fmt;
use std::str::FromStr;

/// Loan product keyed in `interestRates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanKind {
    Personal,
    Home,
    Business,
    Education,
}

impl LoanKind {
    fn key(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Home => "home",
            Self::Business => "business",
            Self::Education => "education",
        }
    }
}

/// An editable settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    SystemName,
    Currency,
    InterestRate(LoanKind),
    EmailNotifications,
    SmsNotifications,
    AutoApproveLoans,
    MaxLoanAmount,
    MinLoanAmount,
}

impl SettingsField {
    /// Every field, in form order
    pub const ALL: [SettingsField; 11] = [
        Self::SystemName,
        Self::Currency,
        Self::InterestRate(LoanKind::Personal),
        Self::InterestRate(LoanKind::Home),
        Self::InterestRate(LoanKind::Business),
        Self::InterestRate(LoanKind::Education),
        Self::EmailNotifications,
        Self::SmsNotifications,
        Self::AutoApproveLoans,
        Self::MaxLoanAmount,
        Self::MinLoanAmount,
    ];

    /// Wire path of the field
    pub fn path(self) -> String {
        match self {
            Self::SystemName => "systemName".to_string(),
            Self::Currency => "currency".to_string(),
            Self::InterestRate(kind) => format!("interestRates.{}", kind.key()),
            Self::EmailNotifications => "emailNotifications".to_string(),
            Self::SmsNotifications => "smsNotifications".to_string(),
            Self::AutoApproveLoans => "autoApproveLoans".to_string(),
            Self::MaxLoanAmount => "maxLoanAmount".to_string(),
            Self::MinLoanAmount => "minLoanAmount".to_string(),
        }
    }

    /// Write `input` into this field of `settings`.
    ///
    /// Text sent to a numeric field is parsed the way the browser form does:
    /// loan amounts as integers, rates as decimals, NaN when nothing parses.
    ///
    /// # Errors
    /// `FinError::InvalidInput` when the input kind does not fit the field
    /// (e.g. a toggle for `currency`); `settings` is left unchanged
    pub fn apply(self, settings: &mut SettingsRecord, input: FieldInput) -> Result<()> {
        match (self, input) {
            (Self::SystemName, FieldInput::Text(s)) => settings.system_name = s,
            (Self::Currency, FieldInput::Text(s)) => settings.currency = s,

            (Self::InterestRate(kind), input) => {
                let rate = input.into_number(parse_float).ok_or_else(|| self.mismatch())?;
                let rates = &mut settings.interest_rates;
                match kind {
                    LoanKind::Personal => rates.personal = rate,
                    LoanKind::Home => rates.home = rate,
                    LoanKind::Business => rates.business = rate,
                    LoanKind::Education => rates.education = rate,
                }
            }

            (Self::MaxLoanAmount, input) => {
                settings.max_loan_amount =
                    input.into_number(parse_int).ok_or_else(|| self.mismatch())?;
            }
            (Self::MinLoanAmount, input) => {
                settings.min_loan_amount =
                    input.into_number(parse_int).ok_or_else(|| self.mismatch())?;
            }

            (Self::EmailNotifications, FieldInput::Toggle(on)) => settings.email_notifications = on,
            (Self::SmsNotifications, FieldInput::Toggle(on)) => settings.sms_notifications = on,
            (Self::AutoApproveLoans, FieldInput::Toggle(on)) => settings.auto_approve_loans = on,

            _ => return Err(self.mismatch()),
        }
        Ok(())
    }

    fn mismatch(self) -> FinError {
        FinError::invalid_input(format!("wrong input type for field {}", self.path()))
    }
}

impl FromStr for SettingsField {
    type Err = FinError;

    fn from_str(path: &str) -> Result<Self> {
        let field = match path.split_once('.') {
            None => match path {
                "systemName" => Self::SystemName,
                "currency" => Self::Currency,
                "emailNotifications" => Self::EmailNotifications,
                "smsNotifications" => Self::SmsNotifications,
                "autoApproveLoans" => Self::AutoApproveLoans,
                "maxLoanAmount" => Self::MaxLoanAmount,
                "minLoanAmount" => Self::MinLoanAmount,
                _ => return Err(unknown(path)),
            },
            Some(("interestRates", child)) => Self::InterestRate(match child {
                "personal" => LoanKind::Personal,
                "home" => LoanKind::Home,
                "business" => LoanKind::Business,
                "education" => LoanKind::Education,
                _ => return Err(unknown(path)),
            }),
            Some(_) => return Err(unknown(path)),
        };
        Ok(field)
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn unknown(path: &str) -> FinError {
    FinError::invalid_input(format!("unknown settings field: {path}"))
}

/// Value coming from a form control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Raw text from an input box
    Text(String),
    /// Already-numeric value
    Number(f64),
    /// Checkbox / switch state
    Toggle(bool),
}

impl FieldInput {
    fn into_number(self, parse: fn(&str) -> f64) -> Option<f64> {
        match self {
            Self::Text(s) => Some(parse(&s)),
            Self::Number(n) => Some(n),
            Self::Toggle(_) => None,
        }
    }
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldInput {
    fn from(on: bool) -> Self {
        Self::Toggle(on)
    }
}

/// Leading-integer parse in the manner of JavaScript `parseInt(s, 10)`.
///
/// Skips leading whitespace, accepts an optional sign, then reads decimal
/// digits until the first non-digit. Returns NaN when no digit is read.
pub fn parse_int(s: &str) -> f64 {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);

    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return f64::NAN;
    }

    // Digit strings always parse as f64; very long ones round like JS does
    let value: f64 = digits.parse().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}

/// Leading-decimal parse in the manner of JavaScript `parseFloat(s)`.
///
/// Reads the longest prefix of the form `[+-]digits[.digits][e[+-]digits]`
/// (or `Infinity`) after leading whitespace. Returns NaN when nothing parses.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);

    if rest.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut mantissa_digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            mantissa_digits += 1;
        }
        end = frac;
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits_start {
            end = exp;
        }
    }

    let value: f64 = rest[..end].parse().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}
