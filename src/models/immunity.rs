use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of `immune-permissions`. The prefix selects the lookup:
/// `@` permission flag, `#` group, anything else a command override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImmunityRule {
    Permission(String),
    Group(String),
    CommandOverride(String),
}

impl ImmunityRule {
    pub fn parse(raw: &str) -> Self {
        match raw.chars().next() {
            Some('@') => ImmunityRule::Permission(raw.to_string()),
            Some('#') => ImmunityRule::Group(raw.to_string()),
            // 空文字列もここに落ちる
            _ => ImmunityRule::CommandOverride(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImmunityRule::Permission(s) | ImmunityRule::Group(s) | ImmunityRule::CommandOverride(s) => {
                s.as_str()
            }
        }
    }
}

impl From<String> for ImmunityRule {
    fn from(raw: String) -> Self {
        ImmunityRule::parse(&raw)
    }
}

impl From<ImmunityRule> for String {
    fn from(rule: ImmunityRule) -> Self {
        match rule {
            ImmunityRule::Permission(s) | ImmunityRule::Group(s) | ImmunityRule::CommandOverride(s) => s,
        }
    }
}

impl fmt::Display for ImmunityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(
            ImmunityRule::parse("@css/generic"),
            ImmunityRule::Permission("@css/generic".to_string())
        );
        assert_eq!(
            ImmunityRule::parse("#css/admins"),
            ImmunityRule::Group("#css/admins".to_string())
        );
        assert_eq!(
            ImmunityRule::parse("css_mute"),
            ImmunityRule::CommandOverride("css_mute".to_string())
        );
    }

    #[test]
    fn test_empty_rule_is_override() {
        assert_eq!(
            ImmunityRule::parse(""),
            ImmunityRule::CommandOverride(String::new())
        );
    }

    #[test]
    fn test_serde_keeps_raw_string() {
        let rules: Vec<ImmunityRule> = serde_json::from_str(r##"["@a/b", "#g", "o"]"##).unwrap();
        assert_eq!(rules.len(), 3);
        assert!(matches!(rules[1], ImmunityRule::Group(_)));
        assert_eq!(serde_json::to_string(&rules).unwrap(), r##"["@a/b","#g","o"]"##);
    }
}
