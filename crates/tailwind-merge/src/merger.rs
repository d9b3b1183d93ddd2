use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::class_map::{ClassGroupId, ClassMap};
use crate::config::Config;
use crate::parse::{ParsedClass, parse_class, sort_modifiers};

/// Everything a merge needs that is fixed once a configuration is loaded.
#[derive(Debug)]
pub(crate) struct MergeContext {
    class_map: ClassMap,
    separator: String,
    prefix: Option<String>,
    order_sensitive_modifiers: Vec<String>,
}

impl MergeContext {
    pub fn new(config: &Config) -> Self {
        Self {
            class_map: ClassMap::new(config),
            separator: config.separator.clone(),
            prefix: config.prefix.clone(),
            order_sensitive_modifiers: config.order_sensitive_modifiers.clone(),
        }
    }

    fn parse<'a>(&self, class: &'a str) -> ParsedClass<'a> {
        parse_class(class, &self.separator, self.prefix.as_deref())
    }

    /// Classifies the base class, first without and then with its postfix
    /// modifier. The flag tells whether the postfix took part.
    fn classify<'a>(&self, parsed: &ParsedClass<'a>) -> Option<(ClassGroupId<'a>, bool)> {
        if parsed.postfix_position.is_some() {
            if let Some(group) = self.class_map.classify(parsed.base_without_postfix()) {
                return Some((group, true));
            }
        }
        self.class_map
            .classify(parsed.base)
            .map(|group| (group, false))
    }

    /// Sorted variants joined with the separator.
    fn modifier_id(&self, parsed: &ParsedClass<'_>) -> String {
        sort_modifiers(&parsed.variants, &self.order_sensitive_modifiers).join(&self.separator)
    }

    /// Merges a whitespace separated class list. Later classes win.
    pub fn merge(&self, input: &str) -> String {
        let mut merger = ClassMerger::new(self);
        let mut result: Vec<&str> = Vec::new();

        for class in input.split_whitespace().rev() {
            if merger.should_keep(class) {
                result.push(class);
            }
        }

        result.reverse();
        result.join(" ")
    }

    pub fn explain(&self, class: &str) -> ClassExplanation {
        let parsed = self.parse(class);
        let mut explanation = ClassExplanation {
            class: class.to_string(),
            variants: parsed.variants.iter().map(|v| v.to_string()).collect(),
            modifier_id: String::new(),
            has_important: parsed.has_important,
            postfix: None,
            is_external: parsed.is_external,
            group: None,
            conflicts: Vec::new(),
        };
        if parsed.is_external {
            return explanation;
        }

        explanation.modifier_id = self.modifier_id(&parsed);
        if let Some((group, has_postfix_modifier)) = self.classify(&parsed) {
            if has_postfix_modifier {
                explanation.postfix = parsed
                    .postfix_position
                    .map(|position| parsed.base[position + 1..].to_string());
            }
            explanation.group = Some(self.class_map.group_name(group));
            if let ClassGroupId::Known(index) = group {
                for conflict in self.class_map.conflicts(index, has_postfix_modifier) {
                    let name = self.class_map.group_name(ClassGroupId::Known(conflict));
                    if !explanation.conflicts.contains(&name) {
                        explanation.conflicts.push(name);
                    }
                }
            }
        }
        explanation
    }
}

/// Stateful class merger that tracks seen groups and determines conflicts
struct ClassMerger<'c, 'a> {
    context: &'c MergeContext,
    /// Maps (has_important, modifiers) to set of seen class groups
    seen_groups: HashMap<(bool, String), HashSet<ClassGroupId<'a>>>,
}

impl<'c, 'a> ClassMerger<'c, 'a> {
    fn new(context: &'c MergeContext) -> Self {
        Self {
            context,
            seen_groups: HashMap::new(),
        }
    }

    /// Parse a class and return whether it should be kept (process in reverse order)
    fn should_keep(&mut self, class: &'a str) -> bool {
        let parsed = self.context.parse(class);
        if parsed.is_external {
            return true;
        }
        let Some((group, has_postfix_modifier)) = self.context.classify(&parsed) else {
            // Not a utility class, always keep
            return true;
        };

        let key = (parsed.has_important, self.context.modifier_id(&parsed));
        let groups = self.seen_groups.entry(key).or_default();

        // A later class already claimed this group under the same modifiers
        if !groups.insert(group) {
            return false;
        }

        if let ClassGroupId::Known(index) = group {
            groups.extend(
                self.context
                    .class_map
                    .conflicts(index, has_postfix_modifier)
                    .map(ClassGroupId::Known),
            );
        }

        true
    }
}

/// How a single class token was understood, for debugging taxonomies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassExplanation {
    pub class: String,
    pub variants: Vec<String>,
    /// The normalized variant context the class competes in
    pub modifier_id: String,
    pub has_important: bool,
    /// Postfix modifier text after `/`, when it took part in classification
    pub postfix: Option<String>,
    /// The class lacks the configured prefix and is never merged
    pub is_external: bool,
    /// Class group id, `None` for classes the taxonomy does not know
    pub group: Option<String>,
    /// Groups this class overrides when it wins
    pub conflicts: Vec<String>,
}

impl fmt::Display for ClassExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class={}", self.class)?;
        if self.is_external {
            return write!(f, " external=true");
        }
        write!(f, " group={}", self.group.as_deref().unwrap_or("none"))?;
        if !self.modifier_id.is_empty() {
            write!(f, " modifiers={}", self.modifier_id)?;
        }
        if self.has_important {
            write!(f, " important=true")?;
        }
        if let Some(postfix) = &self.postfix {
            write!(f, " postfix={postfix}")?;
        }
        if !self.conflicts.is_empty() {
            write!(f, " conflicts={}", self.conflicts.join(","))?;
        }
        Ok(())
    }
}
