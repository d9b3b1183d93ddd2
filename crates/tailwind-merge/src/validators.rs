//! Predicates that recognize the value part of a class name.
//!
//! Every predicate is total: malformed input yields `false`, never a panic.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::ConfigError;

static ARBITRARY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\[(?:(\w[\w-]*):)?(.+)\]$").expect("static regex"));

static ARBITRARY_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\((?:(\w[\w-]*):)?(.+)\)$").expect("static regex"));

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/\d+$").expect("static regex"));

static TSHIRT_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$").expect("static regex"));

static LENGTH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$",
    )
    .expect("static regex")
});

static COLOR_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(rgba?|hsla?|hwb|(ok)?(lab|lch)|color-mix)\(.+\)$").expect("static regex")
});

static SHADOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(inset_)?-?((\d+)?\.?(\d+)[a-z]+|0)_-?((\d+)?\.?(\d+)[a-z]+|0)")
        .expect("static regex")
});

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$",
    )
    .expect("static regex")
});

/// A named string predicate a class group can use in place of a literal.
///
/// Validators are plain data so a taxonomy can be cloned, compared and loaded
/// from TOML by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    Any,
    AnyNonArbitrary,
    Number,
    Integer,
    Fraction,
    Percent,
    TshirtSize,
    ArbitraryValue,
    ArbitraryVariable,
    ArbitrarySize,
    ArbitraryLength,
    ArbitraryNumber,
    ArbitraryPosition,
    ArbitraryImage,
    ArbitraryShadow,
    ArbitraryVariableLength,
    ArbitraryVariableFamilyName,
    ArbitraryVariablePosition,
    ArbitraryVariableSize,
    ArbitraryVariableImage,
    ArbitraryVariableShadow,
}

const NAMES: &[(Validator, &str)] = &[
    (Validator::Any, "any"),
    (Validator::AnyNonArbitrary, "any_non_arbitrary"),
    (Validator::Number, "number"),
    (Validator::Integer, "integer"),
    (Validator::Fraction, "fraction"),
    (Validator::Percent, "percent"),
    (Validator::TshirtSize, "tshirt_size"),
    (Validator::ArbitraryValue, "arbitrary_value"),
    (Validator::ArbitraryVariable, "arbitrary_variable"),
    (Validator::ArbitrarySize, "arbitrary_size"),
    (Validator::ArbitraryLength, "arbitrary_length"),
    (Validator::ArbitraryNumber, "arbitrary_number"),
    (Validator::ArbitraryPosition, "arbitrary_position"),
    (Validator::ArbitraryImage, "arbitrary_image"),
    (Validator::ArbitraryShadow, "arbitrary_shadow"),
    (Validator::ArbitraryVariableLength, "arbitrary_variable_length"),
    (
        Validator::ArbitraryVariableFamilyName,
        "arbitrary_variable_family_name",
    ),
    (
        Validator::ArbitraryVariablePosition,
        "arbitrary_variable_position",
    ),
    (Validator::ArbitraryVariableSize, "arbitrary_variable_size"),
    (Validator::ArbitraryVariableImage, "arbitrary_variable_image"),
    (Validator::ArbitraryVariableShadow, "arbitrary_variable_shadow"),
];

impl Validator {
    pub fn test(self, value: &str) -> bool {
        match self {
            Validator::Any => true,
            Validator::AnyNonArbitrary => is_any_non_arbitrary(value),
            Validator::Number => is_number(value),
            Validator::Integer => is_integer(value),
            Validator::Fraction => is_fraction(value),
            Validator::Percent => is_percent(value),
            Validator::TshirtSize => is_tshirt_size(value),
            Validator::ArbitraryValue => is_arbitrary_value(value),
            Validator::ArbitraryVariable => is_arbitrary_variable(value),
            Validator::ArbitrarySize => arbitrary_value_matches(value, is_label_size, is_never),
            Validator::ArbitraryLength => {
                arbitrary_value_matches(value, is_label_length, is_length_only)
            }
            Validator::ArbitraryNumber => {
                arbitrary_value_matches(value, is_label_number, is_number)
            }
            Validator::ArbitraryPosition => {
                arbitrary_value_matches(value, is_label_position, is_never)
            }
            Validator::ArbitraryImage => arbitrary_value_matches(value, is_label_image, is_image),
            Validator::ArbitraryShadow => {
                arbitrary_value_matches(value, is_label_shadow, is_shadow)
            }
            Validator::ArbitraryVariableLength => {
                arbitrary_variable_matches(value, is_label_length, false)
            }
            Validator::ArbitraryVariableFamilyName => {
                arbitrary_variable_matches(value, is_label_family_name, false)
            }
            Validator::ArbitraryVariablePosition => {
                arbitrary_variable_matches(value, is_label_position, false)
            }
            Validator::ArbitraryVariableSize => {
                arbitrary_variable_matches(value, is_label_size, false)
            }
            Validator::ArbitraryVariableImage => {
                arbitrary_variable_matches(value, is_label_image, false)
            }
            Validator::ArbitraryVariableShadow => {
                arbitrary_variable_matches(value, is_label_shadow, true)
            }
        }
    }

    /// The snake_case name used to reference this validator from TOML.
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(validator, _)| *validator == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }
}

impl FromStr for Validator {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(validator, _)| *validator)
            .ok_or_else(|| ConfigError::UnknownValidator {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.parse::<i64>().is_ok()
}

pub fn is_fraction(value: &str) -> bool {
    FRACTION.is_match(value)
}

pub fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

pub fn is_tshirt_size(value: &str) -> bool {
    TSHIRT_SIZE.is_match(value)
}

pub fn is_arbitrary_value(value: &str) -> bool {
    ARBITRARY_VALUE.is_match(value)
}

pub fn is_arbitrary_variable(value: &str) -> bool {
    ARBITRARY_VARIABLE.is_match(value)
}

pub fn is_any_non_arbitrary(value: &str) -> bool {
    !is_arbitrary_value(value) && !is_arbitrary_variable(value)
}

/// `[label:content]`: a present label decides alone, otherwise the content does.
fn arbitrary_value_matches(
    value: &str,
    test_label: fn(&str) -> bool,
    test_value: fn(&str) -> bool,
) -> bool {
    let Some(captures) = ARBITRARY_VALUE.captures(value) else {
        return false;
    };
    match label(&captures) {
        Some(label) => test_label(label),
        None => captures
            .get(2)
            .is_some_and(|content| test_value(content.as_str())),
    }
}

/// `(label:content)`: the content of a variable is opaque, so only the label
/// can be checked.
fn arbitrary_variable_matches(
    value: &str,
    test_label: fn(&str) -> bool,
    match_without_label: bool,
) -> bool {
    let Some(captures) = ARBITRARY_VARIABLE.captures(value) else {
        return false;
    };
    match label(&captures) {
        Some(label) => test_label(label),
        None => match_without_label,
    }
}

fn label<'a>(captures: &Captures<'a>) -> Option<&'a str> {
    captures
        .get(1)
        .map(|m| m.as_str())
        .filter(|label| !label.is_empty())
}

fn is_length_only(value: &str) -> bool {
    LENGTH_UNIT.is_match(value) && !COLOR_FUNCTION.is_match(value)
}

fn is_never(_: &str) -> bool {
    false
}

fn is_shadow(value: &str) -> bool {
    SHADOW.is_match(value)
}

fn is_image(value: &str) -> bool {
    IMAGE.is_match(value)
}

fn is_label_length(label: &str) -> bool {
    label == "length"
}

fn is_label_number(label: &str) -> bool {
    label == "number"
}

fn is_label_position(label: &str) -> bool {
    label == "position"
}

fn is_label_family_name(label: &str) -> bool {
    label == "family-name"
}

fn is_label_shadow(label: &str) -> bool {
    label == "shadow"
}

fn is_label_size(label: &str) -> bool {
    matches!(label, "length" | "size" | "percentage")
}

fn is_label_image(label: &str) -> bool {
    matches!(label, "image" | "url")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_all(validator: Validator, accepted: &[&str], rejected: &[&str]) {
        for value in accepted {
            assert!(validator.test(value), "{validator} should accept {value:?}");
        }
        for value in rejected {
            assert!(!validator.test(value), "{validator} should reject {value:?}");
        }
    }

    #[test]
    fn any() {
        check_all(Validator::Any, &["", "something"], &[]);
    }

    #[test]
    fn any_non_arbitrary() {
        check_all(
            Validator::AnyNonArbitrary,
            &["test", "1234", "-", "[-]x", "(-"],
            &["[test]", "[label:test]", "(test)", "(label:test)"],
        );
    }

    #[test]
    fn number() {
        check_all(
            Validator::Number,
            &["1", "1.5", "1023713", "1231.503761", ".01", "0"],
            &["", "px", "full", "1/2", "1d5", "one", "1,000", "[1]"],
        );
    }

    #[test]
    fn integer() {
        check_all(
            Validator::Integer,
            &["1", "123", "8312"],
            &[
                "[8312]", "[2]", "[8312px]", "[8312%]", "[8312rem]", "8312.2", "1.2", "one", "1/2",
                "1%", "1px", "",
            ],
        );
    }

    #[test]
    fn fraction() {
        check_all(
            Validator::Fraction,
            &["1/2", "123/209"],
            &["1", "1/2/3", "[1/2]", "1.5/2", "/2"],
        );
    }

    #[test]
    fn percent() {
        check_all(
            Validator::Percent,
            &["1%", "100.001%", ".01%", "0%"],
            &["0", "one%", "%"],
        );
    }

    #[test]
    fn tshirt_size() {
        check_all(
            Validator::TshirtSize,
            &[
                "xs", "sm", "md", "lg", "xl", "2xl", "2.5xl", "10xl", "2xs", "2lg",
            ],
            &["", "hello", "1", "xl3", "2xl3", "-xl", "[sm]"],
        );
    }

    #[test]
    fn arbitrary_value() {
        check_all(
            Validator::ArbitraryValue,
            &[
                "[1]",
                "[bla]",
                "[not-an-arbitrary-value?]",
                "[auto,auto,minmax(0,1fr),calc(100vw-50%)]",
            ],
            &["[]", "[1", "1]", "1", "one", "o[n]e"],
        );
    }

    #[test]
    fn arbitrary_variable() {
        check_all(
            Validator::ArbitraryVariable,
            &["(1)", "(bla)", "(not-an-arbitrary-value?)", "(--my-arbitrary-variable)"],
            &["()", "(1", "1)", "1", "one", "o(n)e"],
        );
    }

    #[test]
    fn arbitrary_length() {
        check_all(
            Validator::ArbitraryLength,
            &[
                "[3.7%]",
                "[481px]",
                "[19.1rem]",
                "[50vw]",
                "[56vh]",
                "[length:var(--arbitrary)]",
                "[calc(100%-2px)]",
                "[0]",
            ],
            &[
                "1", "3px", "1d5", "[1]", "[12px", "12px]", "one", "[rgb(10px,0,0)]",
            ],
        );
    }

    #[test]
    fn arbitrary_number() {
        check_all(
            Validator::ArbitraryNumber,
            &["[number:black]", "[number:bla]", "[number:230]", "[450]"],
            &["[2px]", "[bla]", "[black]", "black", "450"],
        );
    }

    #[test]
    fn arbitrary_position() {
        check_all(
            Validator::ArbitraryPosition,
            &["[position:2px]", "[position:bla]"],
            &["[2px]", "[bla]", "position:2px"],
        );
    }

    #[test]
    fn arbitrary_size() {
        check_all(
            Validator::ArbitrarySize,
            &["[size:2px]", "[size:bla]", "[length:bla]", "[percentage:bla]"],
            &["[2px]", "[bla]", "size:2px", "[position:2px]"],
        );
    }

    #[test]
    fn arbitrary_image() {
        check_all(
            Validator::ArbitraryImage,
            &[
                "[url:var(--my-url)]",
                "[url(something)]",
                "[url:bla]",
                "[image:bla]",
                "[linear-gradient(something)]",
                "[repeating-conic-gradient(something)]",
            ],
            &["[var(--my-url)]", "[bla]", "url:2px", "url(2px)"],
        );
    }

    #[test]
    fn arbitrary_shadow() {
        check_all(
            Validator::ArbitraryShadow,
            &[
                "[0_35px_60px_-15px_rgba(0,0,0,0.3)]",
                "[inset_0_1px_0,inset_0_-1px_0]",
                "[0_0_#00f]",
                "[.5rem_0_rgba(5,5,5,5)]",
                "[-.5rem_0_#123456]",
                "[0.5rem_-0_#123456]",
                "[0.5rem_-0.005vh_#123456]",
                "[0.5rem_-0.005vh]",
                "[shadow:foo]",
            ],
            &["[rgba(5,5,5,5)]", "[#00f]", "[something-else]", "[color:0_0_#00f]"],
        );
    }

    #[test]
    fn arbitrary_variables_with_labels() {
        check_all(
            Validator::ArbitraryVariableLength,
            &["(length:--my-length)", "(length:my-length)"],
            &["(--my-length)", "(size:--my-length)", "[length:--my-length]"],
        );
        check_all(
            Validator::ArbitraryVariableFamilyName,
            &["(family-name:--my-font)"],
            &["(--my-font)", "(other:--my-font)"],
        );
        check_all(
            Validator::ArbitraryVariablePosition,
            &["(position:--my-position)"],
            &["(--my-position)", "(size:--my-position)"],
        );
        check_all(
            Validator::ArbitraryVariableSize,
            &["(size:--my-size)", "(length:--my-size)", "(percentage:--my-size)"],
            &["(--my-size)", "(position:--my-size)"],
        );
        check_all(
            Validator::ArbitraryVariableImage,
            &["(image:--my-image)", "(url:--my-url)"],
            &["(--my-image)", "(length:--my-image)"],
        );
        check_all(
            Validator::ArbitraryVariableShadow,
            &["(shadow:--my-shadow)", "(--my-shadow)"],
            &["(length:--my-shadow)", "[shadow:--my-shadow]"],
        );
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for (validator, name) in NAMES {
            assert_eq!(validator.name(), *name);
            assert_eq!(name.parse::<Validator>().ok(), Some(*validator));
        }
        assert!(matches!(
            "is_length".parse::<Validator>(),
            Err(ConfigError::UnknownValidator { name }) if name == "is_length"
        ));
    }
}
