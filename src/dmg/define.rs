// Command-line setting overrides, dmg-settings -D key=value

use crate::error::{DmgError, DmgResult};

/// A single key=value override passed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    key: String,
    value: String,
}

impl Define {
    /// Parse a "key=value" argument, splitting on the first '='
    pub fn parse(arg: &str) -> DmgResult<Self> {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| DmgError::MalformedDefine(arg.to_string()))?;
        if key.is_empty() {
            return Err(DmgError::MalformedDefine(arg.to_string()));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_equals() {
        let define = Define::parse("background=dmg/bg=new.png").unwrap();
        assert_eq!(define.key(), "background");
        assert_eq!(define.value(), "dmg/bg=new.png");
    }

    #[test]
    fn test_parse_allows_empty_value() {
        let define = Define::parse("arrange_by=").unwrap();
        assert_eq!(define.value(), "");
    }

    #[test]
    fn test_parse_rejects_missing_equals() {
        assert!(matches!(
            Define::parse("filename"),
            Err(DmgError::MalformedDefine(_))
        ));
        assert!(matches!(
            Define::parse("=value"),
            Err(DmgError::MalformedDefine(_))
        ));
    }
}
