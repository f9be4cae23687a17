//! Built-in redirect sets used when no rule files are supplied.

/// Pairs written to the store bucket at startup.
pub const STORE_SEED: &[(&str, &str)] = &[
    (
        "/urlshort-godoc",
        "https://godoc.org/github.com/gophercises/urlshort",
    ),
    ("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
    ("/abdulkader", "https://github.com/abdulkaderm36"),
];

pub const YAML_RULES: &str = r#"
- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /urlshort-final
  url: https://github.com/gophercises/urlshort/tree/solution
"#;

pub const JSON_RULES: &str = r#"
[
    {
        "path": "/google",
        "url": "https://google.com"
    }
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::resolvers::{RuleFormat, parse_rules};

    #[test]
    fn test_builtin_rules_parse() {
        assert_eq!(parse_rules(YAML_RULES.as_bytes(), RuleFormat::Yaml).unwrap().len(), 2);
        assert_eq!(parse_rules(JSON_RULES.as_bytes(), RuleFormat::Json).unwrap().len(), 1);
    }
}
