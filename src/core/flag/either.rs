use std::fmt;

use super::FlagValue;
use crate::error::Result;

/// Parses with `either`, falling back to `or`. `chose_either` records which
/// one accepted the last argument.
#[derive(Debug, Clone, Default)]
pub struct Either<A, B> {
    pub either: A,
    pub or: B,
    pub chose_either: bool,
}

impl<A: FlagValue, B: FlagValue> Either<A, B> {
    pub fn new(either: A, or: B) -> Self {
        Self {
            either,
            or,
            chose_either: false,
        }
    }
}

impl<A: FlagValue, B: FlagValue> FlagValue for Either<A, B> {
    fn set(&mut self, text: &str) -> Result<()> {
        self.chose_either = self.either.set(text).is_ok();
        if self.chose_either {
            return Ok(());
        }
        self.or.set(text)
    }

    fn help(&self) -> String {
        format!("either {}, or {}", self.either.help(), self.or.help())
    }
}

impl<A: FlagValue, B: FlagValue> fmt::Display for Either<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chose_either {
            fmt::Display::fmt(&self.either, f)
        } else {
            fmt::Display::fmt(&self.or, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::{Choice, Cidr};

    fn flag() -> Either<Choice, Cidr> {
        Either::new(Choice::new(&["any", "none"]), Cidr::default())
    }

    #[test]
    fn prefers_first_parser() {
        let mut flag = flag();
        flag.set("ANY").unwrap();
        assert!(flag.chose_either);
        assert_eq!(flag.to_string(), "any");
    }

    #[test]
    fn falls_back_to_second_parser() {
        let mut flag = flag();
        flag.set("10.0.0.0/8").unwrap();
        assert!(!flag.chose_either);
        assert_eq!(flag.to_string(), "10.0.0.0/8");
        assert!(flag.set("neither").is_err());
    }

    #[test]
    fn help_joins_both() {
        assert_eq!(
            flag().help(),
            "either one of [any none], or a CIDR notation IP address and prefix length"
        );
    }
}
