use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;
use crate::validators::Validator;

/// One entry in a class group's definition list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDefinition")]
pub enum ClassDefinition {
    /// A literal class name part. The empty literal marks the current node.
    Literal(String),
    /// A predicate over whatever remains of the class name.
    Validator(Validator),
    /// A nested group that continues from its own base.
    Group(ClassGroup),
    /// A theme scale, expanded when the class map is built.
    Theme(String),
}

impl ClassDefinition {
    pub fn theme(key: &str) -> Self {
        ClassDefinition::Theme(key.to_string())
    }
}

impl From<&str> for ClassDefinition {
    fn from(literal: &str) -> Self {
        ClassDefinition::Literal(literal.to_string())
    }
}

impl From<Validator> for ClassDefinition {
    fn from(validator: Validator) -> Self {
        ClassDefinition::Validator(validator)
    }
}

impl From<ClassGroup> for ClassDefinition {
    fn from(group: ClassGroup) -> Self {
        ClassDefinition::Group(group)
    }
}

/// Builds a `Vec<ClassDefinition>` from literals, validators and groups.
#[macro_export]
macro_rules! defs {
    ($($definition:expr),* $(,)?) => {
        vec![$($crate::ClassDefinition::from($definition)),*]
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassGroup {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default, rename = "values")]
    pub definitions: Vec<ClassDefinition>,
}

impl ClassGroup {
    pub fn new(base: &str, definitions: Vec<ClassDefinition>) -> Self {
        Self {
            base: Some(base.to_string()),
            definitions,
        }
    }

    /// A group whose definitions start at the root of the class name.
    pub fn standalone(definitions: Vec<ClassDefinition>) -> Self {
        Self {
            base: None,
            definitions,
        }
    }

    fn into_definitions(self) -> Vec<ClassDefinition> {
        match self.base {
            None => self.definitions,
            Some(_) => vec![ClassDefinition::Group(self)],
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDefinition {
    Literal(String),
    Validator(ValidatorRef),
    Theme(ThemeRef),
    Group(ClassGroup),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ValidatorRef {
    validator: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeRef {
    theme: String,
}

impl TryFrom<RawDefinition> for ClassDefinition {
    type Error = ConfigError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawDefinition::Literal(literal) => ClassDefinition::Literal(literal),
            RawDefinition::Validator(ValidatorRef { validator }) => {
                ClassDefinition::Validator(validator.parse()?)
            }
            RawDefinition::Theme(ThemeRef { theme }) => ClassDefinition::Theme(theme),
            RawDefinition::Group(group) => ClassDefinition::Group(group),
        })
    }
}

/// The taxonomy and tuning a [`crate::TwMerge`] is built from.
///
/// `Config::default()` is the Tailwind CSS v4 vocabulary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Capacity of the result cache. Zero disables caching.
    pub cache_size: usize,
    /// Separates variants from each other and from the utility, `:` by default.
    pub separator: String,
    /// Namespace every utility must start with, e.g. `tw` for `tw:p-2`.
    pub prefix: Option<String>,
    /// Class groups in registration order. Order decides which group wins a
    /// shared trie node and which validator is tried first.
    pub class_groups: Vec<(String, ClassGroup)>,
    /// Groups whose earlier classes are dropped when the key group wins.
    pub conflicting_class_groups: HashMap<String, Vec<String>>,
    /// Extra conflicts that only apply when the winner has a postfix modifier.
    pub conflicting_class_group_modifiers: HashMap<String, Vec<String>>,
    pub theme: HashMap<String, Vec<ClassDefinition>>,
    /// Variants that keep their position when variants are normalized.
    pub order_sensitive_modifiers: Vec<String>,
}

impl Config {
    pub fn class_group(&self, id: &str) -> Option<&ClassGroup> {
        self.class_groups
            .iter()
            .find(|(group_id, _)| group_id == id)
            .map(|(_, group)| group)
    }

    fn class_group_mut(&mut self, id: &str) -> Option<&mut ClassGroup> {
        self.class_groups
            .iter_mut()
            .find(|(group_id, _)| group_id == id)
            .map(|(_, group)| group)
    }

    /// Checks the structural fields a merge engine cannot work without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        let mut ids = HashSet::new();
        for (id, group) in &self.class_groups {
            if group.base.is_none() && group.definitions.is_empty() {
                return Err(ConfigError::EmptyClassGroup { id: id.clone() });
            }
            if !ids.insert(id.as_str()) {
                return Err(ConfigError::DuplicateClassGroup { id: id.clone() });
            }
        }
        Ok(())
    }

    /// Appends to existing entries and adds missing ones at the end.
    pub fn extend(&mut self, entries: ConfigEntries) {
        for (key, values) in entries.theme {
            self.theme.entry(key).or_default().extend(values);
        }

        for (id, addition) in entries.class_groups {
            match self.class_group_mut(&id) {
                Some(existing) => extend_class_group(existing, addition),
                None => self.class_groups.push((id, addition)),
            }
        }

        for (id, conflicts) in entries.conflicting_class_groups {
            self.conflicting_class_groups
                .entry(id)
                .or_default()
                .extend(conflicts);
        }

        for (id, conflicts) in entries.conflicting_class_group_modifiers {
            self.conflicting_class_group_modifiers
                .entry(id)
                .or_default()
                .extend(conflicts);
        }

        for modifier in entries.order_sensitive_modifiers {
            if !self.order_sensitive_modifiers.contains(&modifier) {
                self.order_sensitive_modifiers.push(modifier);
            }
        }
    }

    /// Replaces existing entries wholesale and adds missing ones at the end.
    pub fn override_with(&mut self, entries: ConfigEntries) {
        self.theme.extend(entries.theme);

        for (id, replacement) in entries.class_groups {
            match self.class_group_mut(&id) {
                Some(existing) => *existing = replacement,
                None => self.class_groups.push((id, replacement)),
            }
        }

        self.conflicting_class_groups
            .extend(entries.conflicting_class_groups);
        self.conflicting_class_group_modifiers
            .extend(entries.conflicting_class_group_modifiers);

        if !entries.order_sensitive_modifiers.is_empty() {
            self.order_sensitive_modifiers = entries.order_sensitive_modifiers;
        }
    }

    /// Applies scalar settings, then overrides, then extensions.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(cache_size) = patch.cache_size {
            self.cache_size = cache_size;
        }
        if let Some(separator) = patch.separator {
            self.separator = separator;
        }
        if let Some(prefix) = patch.prefix {
            self.prefix = Some(prefix).filter(|prefix| !prefix.is_empty());
        }
        self.override_with(patch.overrides);
        self.extend(patch.extend);
    }

    /// The default configuration with a TOML patch applied.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let patch = ConfigPatch::from_toml_str(toml_str)?;
        let mut config = Config::default();
        config.apply(patch);
        config.validate()?;
        Ok(config)
    }
}

/// Two definitions of the same group with different bases are kept side by
/// side as nested groups so neither loses its base.
fn extend_class_group(existing: &mut ClassGroup, addition: ClassGroup) {
    if existing.base == addition.base {
        existing.definitions.extend(addition.definitions);
        return;
    }
    let current = std::mem::take(existing);
    let mut definitions = current.into_definitions();
    definitions.extend(addition.into_definitions());
    *existing = ClassGroup::standalone(definitions);
}

/// Changes to layer on top of a [`Config`], usually read from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigPatch {
    pub cache_size: Option<usize>,
    pub separator: Option<String>,
    pub prefix: Option<String>,
    #[serde(default)]
    pub extend: ConfigEntries,
    #[serde(default, rename = "override")]
    pub overrides: ConfigEntries,
}

impl ConfigPatch {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigEntries {
    #[serde(default)]
    pub theme: HashMap<String, Vec<ClassDefinition>>,
    #[serde(default, deserialize_with = "deserialize_in_order")]
    pub class_groups: Vec<(String, ClassGroup)>,
    #[serde(default)]
    pub conflicting_class_groups: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub conflicting_class_group_modifiers: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub order_sensitive_modifiers: Vec<String>,
}

/// Reads a table into a list so group registration order follows the file.
fn deserialize_in_order<'de, D>(deserializer: D) -> Result<Vec<(String, ClassGroup)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct InOrder;

    impl<'de> Visitor<'de> for InOrder {
        type Value = Vec<(String, ClassGroup)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a table of class groups")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, ClassGroup>()? {
                groups.push(entry);
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(InOrder)
}
