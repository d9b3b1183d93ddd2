use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::{ClassDefinition, Config};
use crate::validators::Validator;

const CLASS_PART_SEPARATOR: char = '-';
const ARBITRARY_PROPERTY_PREFIX: &str = "arbitrary..";

/// Position of a class group in [`Config::class_groups`].
pub(crate) type GroupIndex = usize;

/// The group a class name was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ClassGroupId<'a> {
    Known(GroupIndex),
    /// `[property:value]`, keyed by the CSS property so two arbitrary
    /// properties on the same property still conflict.
    ArbitraryProperty(&'a str),
}

#[derive(Debug, Default)]
struct Node {
    group: Option<GroupIndex>,
    children: HashMap<String, usize>,
    validators: Vec<(Validator, GroupIndex)>,
}

/// A frozen prefix trie over class name parts plus the conflict graph,
/// resolved to group indices.
#[derive(Debug)]
pub(crate) struct ClassMap {
    nodes: Vec<Node>,
    group_ids: Vec<String>,
    conflicts: Vec<Vec<GroupIndex>>,
    postfix_conflicts: Vec<Vec<GroupIndex>>,
}

impl ClassMap {
    pub fn new(config: &Config) -> Self {
        let mut builder = ClassMapBuilder {
            nodes: vec![Node::default()],
            theme: &config.theme,
            theme_stack: Vec::new(),
        };

        for (index, (_, group)) in config.class_groups.iter().enumerate() {
            let node = match &group.base {
                Some(base) => builder.descend(ROOT, base),
                None => ROOT,
            };
            if group.definitions.is_empty() {
                builder.mark(node, index);
            }
            builder.add_definitions(node, &group.definitions, index);
        }

        let group_ids: Vec<String> = config
            .class_groups
            .iter()
            .map(|(id, _)| id.clone())
            .collect();
        let conflicts = resolve_edges(&group_ids, &config.conflicting_class_groups);
        let postfix_conflicts =
            resolve_edges(&group_ids, &config.conflicting_class_group_modifiers);

        debug!(
            nodes = builder.nodes.len(),
            groups = group_ids.len(),
            "built class map"
        );

        ClassMap {
            nodes: builder.nodes,
            group_ids,
            conflicts,
            postfix_conflicts,
        }
    }

    /// Finds the group of a modifier-free class name.
    pub fn classify<'a>(&self, class_name: &'a str) -> Option<ClassGroupId<'a>> {
        let parts = match class_name.strip_prefix(CLASS_PART_SEPARATOR) {
            Some(negated) if !negated.is_empty() => negated,
            _ => class_name,
        };
        if let Some(index) = self.walk(ROOT, Some(parts)) {
            return Some(ClassGroupId::Known(index));
        }
        arbitrary_property(class_name).map(ClassGroupId::ArbitraryProperty)
    }

    /// `rest` is `None` once every part has been consumed.
    fn walk(&self, node: usize, rest: Option<&str>) -> Option<GroupIndex> {
        let node = &self.nodes[node];
        let Some(rest) = rest else {
            return node.group;
        };

        let (head, tail) = match rest.split_once(CLASS_PART_SEPARATOR) {
            Some((head, tail)) => (head, Some(tail)),
            None => (rest, None),
        };
        if let Some(&child) = node.children.get(head) {
            if let Some(index) = self.walk(child, tail) {
                return Some(index);
            }
        }

        node.validators
            .iter()
            .find(|(validator, _)| validator.test(rest))
            .map(|(_, index)| *index)
    }

    /// Groups that lose to `group` under the same modifiers.
    pub fn conflicts(
        &self,
        group: GroupIndex,
        has_postfix_modifier: bool,
    ) -> impl Iterator<Item = GroupIndex> + '_ {
        let postfix: &[GroupIndex] = if has_postfix_modifier {
            &self.postfix_conflicts[group]
        } else {
            &[]
        };
        self.conflicts[group].iter().chain(postfix).copied()
    }

    pub fn group_name(&self, id: ClassGroupId<'_>) -> String {
        match id {
            ClassGroupId::Known(index) => self.group_ids[index].clone(),
            ClassGroupId::ArbitraryProperty(property) => {
                format!("{ARBITRARY_PROPERTY_PREFIX}{property}")
            }
        }
    }
}

const ROOT: usize = 0;

struct ClassMapBuilder<'c> {
    nodes: Vec<Node>,
    theme: &'c HashMap<String, Vec<ClassDefinition>>,
    theme_stack: Vec<&'c str>,
}

impl<'c> ClassMapBuilder<'c> {
    fn descend(&mut self, mut node: usize, path: &str) -> usize {
        for part in path.split(CLASS_PART_SEPARATOR) {
            node = match self.nodes[node].children.get(part) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(part.to_string(), child);
                    child
                }
            };
        }
        node
    }

    /// The first group to reach a node keeps it.
    fn mark(&mut self, node: usize, group: GroupIndex) {
        self.nodes[node].group.get_or_insert(group);
    }

    fn add_definitions(&mut self, node: usize, definitions: &[ClassDefinition], group: GroupIndex) {
        for definition in definitions {
            match definition {
                ClassDefinition::Literal(literal) if literal.is_empty() => self.mark(node, group),
                ClassDefinition::Literal(literal) => {
                    let target = self.descend(node, literal);
                    self.mark(target, group);
                }
                ClassDefinition::Validator(validator) => {
                    self.nodes[node].validators.push((*validator, group));
                }
                ClassDefinition::Group(nested) => {
                    let target = match &nested.base {
                        Some(base) => self.descend(node, base),
                        None => node,
                    };
                    if nested.definitions.is_empty() {
                        self.mark(target, group);
                    }
                    self.add_definitions(target, &nested.definitions, group);
                }
                ClassDefinition::Theme(key) => self.add_theme(node, key, group),
            }
        }
    }

    fn add_theme(&mut self, node: usize, key: &str, group: GroupIndex) {
        let theme = self.theme;
        let Some((key, values)) = theme.get_key_value(key) else {
            warn!(key, "class group references a missing theme key");
            return;
        };
        if self.theme_stack.contains(&key.as_str()) {
            warn!(key = key.as_str(), "theme references itself, ignoring the cycle");
            return;
        }
        self.theme_stack.push(key);
        self.add_definitions(node, values, group);
        self.theme_stack.pop();
    }
}

fn resolve_edges(
    group_ids: &[String],
    edges: &HashMap<String, Vec<String>>,
) -> Vec<Vec<GroupIndex>> {
    let mut index_of: HashMap<&str, GroupIndex> = HashMap::with_capacity(group_ids.len());
    for (index, id) in group_ids.iter().enumerate() {
        index_of.entry(id.as_str()).or_insert(index);
    }

    let mut resolved = vec![Vec::new(); group_ids.len()];
    for (id, targets) in edges {
        let Some(&source) = index_of.get(id.as_str()) else {
            warn!(group = id.as_str(), "conflict list for an unknown class group");
            continue;
        };
        for target in targets {
            match index_of.get(target.as_str()) {
                Some(&target) => resolved[source].push(target),
                None => warn!(
                    group = id.as_str(),
                    conflict = target.as_str(),
                    "conflict edge names an unknown class group"
                ),
            }
        }
    }
    resolved
}

fn arbitrary_property(class_name: &str) -> Option<&str> {
    let inner = class_name.strip_prefix('[')?.strip_suffix(']')?;
    let (property, _) = inner.split_once(':')?;
    Some(property).filter(|property| !property.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassGroup;
    use crate::defs;
    use expect_test::{Expect, expect};

    fn small_config() -> Config {
        let mut config = Config::default();
        config.class_groups = vec![
            ("display".to_string(), ClassGroup::standalone(defs!["block", "inline-block"])),
            (
                "p".to_string(),
                ClassGroup::new("p", defs![ClassDefinition::theme("spacing")]),
            ),
            ("px".to_string(), ClassGroup::new("px", defs![Validator::Number])),
            (
                "shadow".to_string(),
                ClassGroup::new("shadow", defs!["", "sm", Validator::ArbitraryShadow]),
            ),
            (
                "shadow-color".to_string(),
                ClassGroup::new("shadow", defs![Validator::Any]),
            ),
            ("inset".to_string(), ClassGroup::new("inset", defs![Validator::Integer])),
            ("duplicate".to_string(), ClassGroup::standalone(defs!["block"])),
        ];
        config.theme = HashMap::from([
            ("spacing".to_string(), defs!["px", Validator::Number]),
            ("loop".to_string(), defs![ClassDefinition::theme("loop"), "x"]),
        ]);
        config.conflicting_class_groups =
            HashMap::from([("p".to_string(), vec!["px".to_string(), "missing".to_string()])]);
        config.conflicting_class_group_modifiers =
            HashMap::from([("shadow".to_string(), vec!["shadow-color".to_string()])]);
        config
    }

    fn check(map: &ClassMap, class_names: &[&str], expected: Expect) {
        let actual = class_names
            .iter()
            .map(|class_name| {
                let group = map
                    .classify(class_name)
                    .map(|id| map.group_name(id))
                    .unwrap_or_else(|| "-".to_string());
                format!("{class_name} => {group}")
            })
            .collect::<Vec<_>>()
            .join("\n");
        expected.assert_eq(&actual);
    }

    #[test]
    fn test_classify_small_taxonomy() {
        let map = ClassMap::new(&small_config());
        check(
            &map,
            &[
                "block",
                "inline-block",
                "inline",
                "p-px",
                "p-2",
                "p-x",
                "px-2",
                "px-y",
                "shadow",
                "shadow-sm",
                "shadow-[0_0_2px_black]",
                "shadow-red",
                "-inset-2",
                "-inset-x",
                "[color:red]",
                "[:red]",
                "[color]",
            ],
            expect![[r#"
                block => display
                inline-block => display
                inline => -
                p-px => p
                p-2 => p
                p-x => -
                px-2 => px
                px-y => -
                shadow => shadow
                shadow-sm => shadow
                shadow-[0_0_2px_black] => shadow
                shadow-red => shadow-color
                -inset-2 => inset
                -inset-x => -
                [color:red] => arbitrary..color
                [:red] => -
                [color] => -"#]],
        );
    }

    #[test]
    fn test_theme_cycle_is_cut() {
        let mut config = small_config();
        config.class_groups.push((
            "looped".to_string(),
            ClassGroup::new("looped", defs![ClassDefinition::theme("loop")]),
        ));
        config.class_groups.push((
            "ghost".to_string(),
            ClassGroup::new("ghost", defs![ClassDefinition::theme("nope")]),
        ));
        let map = ClassMap::new(&config);
        check(
            &map,
            &["looped-x", "looped-y", "ghost-1"],
            expect![[r#"
                looped-x => looped
                looped-y => -
                ghost-1 => -"#]],
        );
    }

    #[test]
    fn test_conflicts_skip_unknown_groups() {
        let map = ClassMap::new(&small_config());
        let p = 1;
        let shadow = 3;
        assert_eq!(map.conflicts(p, false).collect::<Vec<_>>(), vec![2]);
        assert_eq!(map.conflicts(shadow, false).count(), 0);
        assert_eq!(map.conflicts(shadow, true).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_classify_default_taxonomy() {
        let map = ClassMap::new(&Config::default());
        check(
            &map,
            &[
                "p-4",
                "px-2",
                "-m-1",
                "w-1",
                "w-1/2",
                "text-lg",
                "text-red-500",
                "text-[12px]",
                "text-(length:--size)",
                "bg-[url(/a.png)]",
                "bg-red-500",
                "font-bold",
                "font-sans",
                "inline-block",
                "stroke-2",
                "stroke-red-500",
                "grow",
                "col-span-2",
                "col-start-2",
                "translate-none",
                "not-a-class",
            ],
            expect![[r#"
                p-4 => p
                px-2 => px
                -m-1 => m
                w-1 => w
                w-1/2 => w
                text-lg => font-size
                text-red-500 => text-color
                text-[12px] => font-size
                text-(length:--size) => font-size
                bg-[url(/a.png)] => bg-image
                bg-red-500 => bg-color
                font-bold => font-weight
                font-sans => font-family
                inline-block => display
                stroke-2 => stroke-w
                stroke-red-500 => stroke
                grow => grow
                col-span-2 => col-start-end
                col-start-2 => col-start
                translate-none => translate-none
                not-a-class => -"#]],
        );
    }
}
