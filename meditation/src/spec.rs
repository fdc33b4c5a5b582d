//! Keyed checking of attribute-style mappings.
//!
//! A [`Spec`] declares fields by key. Each field is required, optional, or has a
//! default. Unknown input keys are ignored unless the spec is strict.

use indexmap::IndexMap;
use nucleus_types::{
    Array, Capability, Key, MeditationSettings, Strictness, Value, ViolationLogging,
};

use crate::constraint::Constraint;
use crate::error::ValidationFailure;
use crate::result::{CheckResult, Location, Violation};

#[derive(Debug, Clone)]
enum Presence {
    Required,
    Optional,
    Defaulted(Value),
}

#[derive(Debug, Clone)]
struct Field {
    constraint: Constraint,
    presence: Presence,
}

/// Mapping from key to constraint, checked against key-to-value inputs.
///
/// The default strictness is [`Strictness::Lenient`].
#[derive(Debug, Clone, Default)]
pub struct Spec {
    fields: IndexMap<Key, Field>,
    strictness: Strictness,
    logging: ViolationLogging,
}

impl Spec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply resolved settings (strictness and violation logging).
    #[must_use]
    pub fn with_settings(mut self, settings: MeditationSettings) -> Self {
        self.strictness = settings.strictness();
        self.logging = settings.logging();
        self
    }

    pub fn required(self, key: impl Into<Key>, constraint: Constraint) -> Self {
        self.field(key.into(), constraint, Presence::Required)
    }

    /// Validated only when present.
    pub fn optional(self, key: impl Into<Key>, constraint: Constraint) -> Self {
        self.field(key.into(), constraint, Presence::Optional)
    }

    /// Never missing: [`Spec::complete`] fills `default` when absent.
    pub fn with_default(
        self,
        key: impl Into<Key>,
        constraint: Constraint,
        default: impl Into<Value>,
    ) -> Self {
        self.field(key.into(), constraint, Presence::Defaulted(default.into()))
    }

    #[must_use]
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    #[must_use]
    pub fn strict(self) -> Self {
        self.strictness(Strictness::Strict)
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strictness.rejects_unknown_keys()
    }

    #[must_use]
    pub fn constraint(&self, key: &Key) -> Option<&Constraint> {
        self.fields.get(key).map(|field| &field.constraint)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.fields.keys()
    }

    fn field(mut self, key: Key, constraint: Constraint, presence: Presence) -> Self {
        self.fields.insert(
            key,
            Field {
                constraint,
                presence,
            },
        );
        self
    }

    /// Violations come in field declaration order, then unknown keys in input order.
    #[must_use]
    pub fn check(&self, input: &Array) -> CheckResult {
        let mut violations = Vec::new();

        for (key, field) in &self.fields {
            let location = || Location::Key(key.clone());
            match (input.get(key), &field.presence) {
                (Some(value), _) => {
                    if !field.constraint.check(value) {
                        violations.push(Violation::mismatch(location(), &field.constraint, value));
                    }
                }
                (None, Presence::Required) => {
                    violations.push(Violation::missing(location(), &field.constraint));
                }
                (None, Presence::Optional | Presence::Defaulted(_)) => {}
            }
        }

        if self.is_strict() {
            violations.extend(
                input
                    .iter()
                    .filter(|(key, _)| !self.fields.contains_key(*key))
                    .map(|(key, value)| Violation::unknown(Location::Key(key.clone()), value)),
            );
        }

        let result = CheckResult::from_violations(violations);
        result.report(self.logging, "spec");
        result
    }

    /// Check any value: arrays directly, read-maps through their entries.
    #[must_use]
    pub fn check_value(&self, value: &Value) -> CheckResult {
        match value {
            Value::Array(array) => self.check(array),
            Value::Object(object) if object.implements(Capability::ReadMap) => {
                match object.to_array() {
                    Some(array) => self.check(&array),
                    None => self.not_a_mapping(value),
                }
            }
            _ => self.not_a_mapping(value),
        }
    }

    fn not_a_mapping(&self, value: &Value) -> CheckResult {
        let result = CheckResult::from_violations(vec![Violation::mismatch(
            Location::Root,
            &Constraint::Capability(Capability::ReadMap),
            value,
        )]);
        result.report(self.logging, "spec");
        result
    }

    pub fn enforce(&self, input: &Array) -> Result<(), ValidationFailure> {
        self.check(input).into_result()
    }

    /// Copy of `input` with defaults filled in for absent keys.
    #[must_use]
    pub fn complete(&self, input: &Array) -> Array {
        let mut completed = input.clone();
        for (key, field) in &self.fields {
            if let Presence::Defaulted(default) = &field.presence
                && !completed.contains_key(key)
            {
                completed.insert(key.clone(), default.clone());
            }
        }
        completed
    }
}
