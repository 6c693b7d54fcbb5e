use std::collections::HashMap;
use anyhow::{anyhow, Result};

pub const QUICK_ADD_KEYS: &[&str] = &["due", "priority", "description"];

/// Short keys that would otherwise be ambiguous prefixes (`d` matches both
/// `due` and `description`).
pub const QUICK_ADD_ALIASES: &[(&str, &str)] = &[("d", "due")];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    /// Keyed by the expanded candidate name, never by the typed prefix.
    pub metadata: HashMap<String, String>,
    /// `key:value` tokens whose key prefixes more than one candidate.
    pub ambiguous: Vec<String>,
}

#[derive(Debug, PartialEq)]
enum KeyMatch {
    Found(String),
    Unknown,
    Ambiguous(Vec<String>),
}

fn resolve_key(key: &str, candidates: &[&str], aliases: &[(&str, &str)]) -> KeyMatch {
    let key = key.to_lowercase();
    let key = key.as_str();

    // 1. Exact match
    if candidates.contains(&key) {
        return KeyMatch::Found(key.to_string());
    }

    // 2. Alias
    if let Some((_, full)) = aliases.iter().find(|(alias, _)| *alias == key) {
        return KeyMatch::Found(full.to_string());
    }

    // 3. Prefix match
    let matches: Vec<String> = candidates
        .iter()
        .filter(|c| c.starts_with(key))
        .map(|c| c.to_string())
        .collect();

    match matches.len() {
        0 => KeyMatch::Unknown,
        1 => KeyMatch::Found(matches[0].clone()),
        _ => KeyMatch::Ambiguous(matches),
    }
}

/// Splits `key:value` tokens off into metadata. A token whose key matches no
/// candidate stays part of the name, so "Call at 10:30" keeps its time; a key
/// matching several candidates is collected in `ambiguous`.
pub fn parse_args(args: &[String], known_keys: &[&str], aliases: &[(&str, &str)]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut metadata = HashMap::new();
    let mut ambiguous = Vec::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                match resolve_key(key, known_keys, aliases) {
                    KeyMatch::Found(full_key) => {
                        metadata.insert(full_key, value.to_string());
                        continue;
                    }
                    KeyMatch::Ambiguous(_) => {
                        ambiguous.push(arg.clone());
                        continue;
                    }
                    KeyMatch::Unknown => {}
                }
            }
        }
        name_parts.push(arg.as_str());
    }

    ParsedInput {
        name: name_parts.join(" "),
        metadata,
        ambiguous,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    match resolve_key(key, candidates, &[]) {
        KeyMatch::Found(full) => Ok(full),
        KeyMatch::Unknown => Err(anyhow!("Unknown key: '{}'", key)),
        KeyMatch::Ambiguous(matches) => {
            Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(|s| s.to_string()).collect()
    }

    fn quick(line: &str) -> ParsedInput {
        parse_args(&words(line), QUICK_ADD_KEYS, QUICK_ADD_ALIASES)
    }

    #[test]
    fn test_parse_simple() {
        let parsed = quick("Buy milk due:2025-01-01 pri:high");
        assert_eq!(parsed.name, "Buy milk");
        assert_eq!(parsed.metadata.get("due"), Some(&"2025-01-01".to_string()));
        assert_eq!(parsed.metadata.get("priority"), Some(&"high".to_string()));
        assert_eq!(parsed.metadata.len(), 2);
        assert!(parsed.ambiguous.is_empty());
    }

    #[test]
    fn test_d_alias_means_due() {
        let parsed = quick("Pay rent d:2025-01-01 desc:online");
        assert_eq!(parsed.name, "Pay rent");
        assert_eq!(parsed.metadata.get("due"), Some(&"2025-01-01".to_string()));
        assert_eq!(parsed.metadata.get("description"), Some(&"online".to_string()));
    }

    #[test]
    fn test_unknown_keys_stay_in_name() {
        let parsed = quick("Call at 10:30 du:2025-02-03 :odd");
        assert_eq!(parsed.name, "Call at 10:30 :odd");
        assert_eq!(parsed.metadata.get("due"), Some(&"2025-02-03".to_string()));
    }

    #[test]
    fn test_ambiguous_keys_are_collected() {
        let parsed = parse_args(&words("Plan trip p:x due:2025-01-01"), &["due", "project", "priority"], &[]);
        assert_eq!(parsed.name, "Plan trip");
        assert_eq!(parsed.ambiguous, vec!["p:x".to_string()]);
        assert_eq!(parsed.metadata.len(), 1);
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["due", "project", "priority"];

        assert_eq!(expand_key("d", &candidates).unwrap(), "due");
        assert_eq!(expand_key("du", &candidates).unwrap(), "due");
        assert_eq!(expand_key("DUE", &candidates).unwrap(), "due");

        assert_eq!(expand_key("pro", &candidates).unwrap(), "project");
        assert_eq!(expand_key("pri", &candidates).unwrap(), "priority");

        // Ambiguous
        assert!(expand_key("p", &candidates).is_err());
        assert!(expand_key("pr", &candidates).is_err());

        // Unknown
        assert!(expand_key("x", &candidates).is_err());
    }
}
