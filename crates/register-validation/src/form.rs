//! Form snapshot, rule set and error map
//!
//! All three are ordered by field declaration so that hosts can render and
//! prompt in a stable order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Rule;

/// Current string value of every field, owned by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(IndexMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Value of `field`, or the empty string when the field is absent
    pub fn value(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FormData {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Ordered rule list per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRules(IndexMap<String, Vec<Rule>>);

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules of the registration form
    ///
    /// - name: required, minLength(2), isAlphabetic
    /// - email: required, email
    /// - phone: required, phone
    /// - dob: required, isAdult
    /// - password: password
    /// - confirmPassword: required, matches(password)
    pub fn registration() -> Self {
        Self::new()
            .field(
                "name",
                vec![Rule::Required, Rule::MinLength(2), Rule::IsAlphabetic],
            )
            .field("email", vec![Rule::Required, Rule::Email])
            .field("phone", vec![Rule::Required, Rule::Phone])
            .field("dob", vec![Rule::Required, Rule::IsAdult])
            .field("password", vec![Rule::Password])
            .field(
                "confirmPassword",
                vec![Rule::Required, Rule::matches("password")],
            )
    }

    /// Builder: set the rule list of `field`, replacing any previous list
    pub fn field(mut self, field: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.insert(field, rules);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, rules: Vec<Rule>) {
        self.0.insert(field.into(), rules);
    }

    pub fn get(&self, field: &str) -> Option<&[Rule]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Field names in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Fields whose rules compare against `field` with `matches`
    ///
    /// Hosts re-validate these whenever `field` changes so that a
    /// confirmation error never lags behind the value it depends on.
    pub fn dependents(&self, field: &str) -> Vec<&str> {
        self.iter()
            .filter(|(_, rules)| {
                rules
                    .iter()
                    .any(|rule| matches!(rule, Rule::Matches(target) if target == field))
            })
            .map(|(name, _)| name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One error message per failing field; valid fields are absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(IndexMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// The submit gate: true when no field failed
    pub fn is_submittable(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    /// Error message for a specific field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_data_preserves_order() {
        let form = FormData::from([("b", "2"), ("a", "1")]);
        let fields: Vec<_> = form.iter().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["b", "a"]);
    }

    #[test]
    fn test_missing_field_value_is_empty() {
        let form = FormData::new().with("email", "al@x.com");
        assert_eq!(form.value("email"), "al@x.com");
        assert_eq!(form.value("phone"), "");
        assert_eq!(form.get("phone"), None);
    }

    #[test]
    fn test_registration_rules_declaration_order() {
        let rules = FormRules::registration();
        let fields: Vec<_> = rules.fields().collect();
        assert_eq!(
            fields,
            vec!["name", "email", "phone", "dob", "password", "confirmPassword"]
        );
    }

    #[test]
    fn test_dependents() {
        let rules = FormRules::registration();
        assert_eq!(rules.dependents("password"), vec!["confirmPassword"]);
        assert!(rules.dependents("email").is_empty());
    }

    #[test]
    fn test_rules_from_json() {
        let rules: FormRules = serde_json::from_str(
            r#"{
                "name": ["required", {"minLength": 2}, "isAlphabetic"],
                "email": ["required", "email"],
                "phone": ["required", "phone"],
                "dob": ["required", "isAdult"],
                "password": ["password"],
                "confirmPassword": ["required", {"matches": "password"}]
            }"#,
        )
        .unwrap();
        assert_eq!(rules, FormRules::registration());
    }

    #[test]
    fn test_rules_from_toml() {
        let rules: FormRules = toml::from_str(
            r#"
            name = ["required", { minLength = 2 }, "isAlphabetic"]
            confirmPassword = ["required", { matches = "password" }]
            "#,
        )
        .unwrap();
        assert_eq!(
            rules.get("name"),
            Some(&[Rule::Required, Rule::MinLength(2), Rule::IsAlphabetic][..])
        );
        assert_eq!(
            rules.get("confirmPassword"),
            Some(&[Rule::Required, Rule::matches("password")][..])
        );
    }

    #[test]
    fn test_form_errors_serialize_as_plain_object() {
        let errors: FormErrors = [("confirmPassword", "Does not match password")]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"confirmPassword":"Does not match password"}"#
        );
        assert!(!errors.is_submittable());
    }
}
