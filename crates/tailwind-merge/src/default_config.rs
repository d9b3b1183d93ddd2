//! The Tailwind CSS v4 class taxonomy.
//!
//! Group ids follow the names used across the Tailwind merge ecosystem so
//! conflict edges and user patches can refer to them.

use std::collections::HashMap;

use crate::config::{ClassDefinition, ClassGroup, Config};
use crate::defs;
use crate::validators::Validator::*;

const DEFAULT_CACHE_SIZE: usize = 500;

fn theme(key: &str) -> ClassDefinition {
    ClassDefinition::theme(key)
}

fn group(base: &str, definitions: Vec<ClassDefinition>) -> ClassGroup {
    ClassGroup::new(base, definitions)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn scale_break() -> Vec<ClassDefinition> {
    defs!["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"]
}

fn scale_position() -> Vec<ClassDefinition> {
    defs![
        "center",
        "top",
        "bottom",
        "left",
        "right",
        "top-left",
        "left-top",
        "top-right",
        "right-top",
        "bottom-right",
        "right-bottom",
        "bottom-left",
        "left-bottom",
    ]
}

fn scale_position_with_arbitrary() -> Vec<ClassDefinition> {
    [scale_position(), defs![ArbitraryVariable, ArbitraryValue]].concat()
}

fn scale_overflow() -> Vec<ClassDefinition> {
    defs!["auto", "hidden", "clip", "visible", "scroll"]
}

fn scale_overscroll() -> Vec<ClassDefinition> {
    defs!["auto", "contain", "none"]
}

fn scale_unambiguous_spacing() -> Vec<ClassDefinition> {
    defs![ArbitraryVariable, ArbitraryValue, theme("spacing")]
}

fn scale_inset() -> Vec<ClassDefinition> {
    [defs![Fraction, "full", "auto"], scale_unambiguous_spacing()].concat()
}

fn scale_grid_template_cols_rows() -> Vec<ClassDefinition> {
    defs![Integer, "none", "subgrid", ArbitraryVariable, ArbitraryValue]
}

fn scale_grid_col_row_start_and_end() -> Vec<ClassDefinition> {
    defs![
        "auto",
        group(
            "span",
            defs!["full", Integer, ArbitraryVariable, ArbitraryValue]
        ),
        Integer,
        ArbitraryVariable,
        ArbitraryValue,
    ]
}

fn scale_grid_col_row_start_or_end() -> Vec<ClassDefinition> {
    defs![Integer, "auto", ArbitraryVariable, ArbitraryValue]
}

fn scale_grid_auto_cols_rows() -> Vec<ClassDefinition> {
    defs!["auto", "min", "max", "fr", ArbitraryVariable, ArbitraryValue]
}

fn scale_align_primary_axis() -> Vec<ClassDefinition> {
    defs![
        "start",
        "end",
        "center",
        "between",
        "around",
        "evenly",
        "stretch",
        "baseline",
        "center-safe",
        "end-safe",
    ]
}

fn scale_align_secondary_axis() -> Vec<ClassDefinition> {
    defs!["start", "end", "center", "stretch", "center-safe", "end-safe"]
}

fn scale_margin() -> Vec<ClassDefinition> {
    [defs!["auto"], scale_unambiguous_spacing()].concat()
}

fn scale_sizing() -> Vec<ClassDefinition> {
    [
        defs![
            Fraction, "auto", "full", "dvw", "dvh", "lvw", "lvh", "svw", "svh", "min", "max",
            "fit",
        ],
        scale_unambiguous_spacing(),
    ]
    .concat()
}

fn scale_color() -> Vec<ClassDefinition> {
    defs![theme("color"), ArbitraryVariable, ArbitraryValue]
}

fn scale_bg_position() -> Vec<ClassDefinition> {
    [
        scale_position(),
        defs![
            ArbitraryVariablePosition,
            ArbitraryPosition,
            group("position", defs![ArbitraryVariable, ArbitraryValue]),
        ],
    ]
    .concat()
}

fn scale_bg_repeat() -> Vec<ClassDefinition> {
    defs![
        "no-repeat",
        group("repeat", defs!["", "x", "y", "space", "round"]),
    ]
}

fn scale_bg_size() -> Vec<ClassDefinition> {
    defs![
        "auto",
        "cover",
        "contain",
        ArbitraryVariableSize,
        ArbitrarySize,
        group("size", defs![ArbitraryVariable, ArbitraryValue]),
    ]
}

fn scale_gradient_stop_position() -> Vec<ClassDefinition> {
    defs![Percent, ArbitraryVariableLength, ArbitraryLength]
}

fn scale_radius() -> Vec<ClassDefinition> {
    defs![
        "",
        "none",
        "full",
        theme("radius"),
        ArbitraryVariable,
        ArbitraryValue,
    ]
}

fn scale_border_width() -> Vec<ClassDefinition> {
    defs!["", Number, ArbitraryVariableLength, ArbitraryLength]
}

fn scale_line_style() -> Vec<ClassDefinition> {
    defs!["solid", "dashed", "dotted", "double"]
}

fn scale_blend_mode() -> Vec<ClassDefinition> {
    defs![
        "normal",
        "multiply",
        "screen",
        "overlay",
        "darken",
        "lighten",
        "color-dodge",
        "color-burn",
        "hard-light",
        "soft-light",
        "difference",
        "exclusion",
        "hue",
        "saturation",
        "color",
        "luminosity",
    ]
}

fn scale_mask_image_position() -> Vec<ClassDefinition> {
    defs![Number, Percent, ArbitraryVariablePosition, ArbitraryPosition]
}

fn scale_blur() -> Vec<ClassDefinition> {
    defs![
        "",
        "none",
        theme("blur"),
        ArbitraryVariable,
        ArbitraryValue
    ]
}

fn scale_rotate() -> Vec<ClassDefinition> {
    defs!["none", Number, ArbitraryVariable, ArbitraryValue]
}

fn scale_scale() -> Vec<ClassDefinition> {
    defs!["none", Number, ArbitraryVariable, ArbitraryValue]
}

fn scale_skew() -> Vec<ClassDefinition> {
    defs![Number, ArbitraryVariable, ArbitraryValue]
}

fn scale_translate() -> Vec<ClassDefinition> {
    [defs![Fraction, "full"], scale_unambiguous_spacing()].concat()
}

fn scale_filter_amount() -> Vec<ClassDefinition> {
    defs![Number, ArbitraryVariable, ArbitraryValue]
}

fn scale_filter_toggle() -> Vec<ClassDefinition> {
    defs!["", Number, ArbitraryVariable, ArbitraryValue]
}

fn default_theme() -> HashMap<String, Vec<ClassDefinition>> {
    [
        ("animate", defs!["spin", "ping", "pulse", "bounce"]),
        ("aspect", defs!["video"]),
        ("blur", defs![TshirtSize]),
        ("breakpoint", defs![TshirtSize]),
        ("color", defs![Any]),
        ("container", defs![TshirtSize]),
        ("drop-shadow", defs![TshirtSize]),
        ("ease", defs!["in", "out", "in-out"]),
        ("font", defs![AnyNonArbitrary]),
        (
            "font-weight",
            defs![
                "thin",
                "extralight",
                "light",
                "normal",
                "medium",
                "semibold",
                "bold",
                "extrabold",
                "black",
            ],
        ),
        ("inset-shadow", defs![TshirtSize]),
        (
            "leading",
            defs!["none", "tight", "snug", "normal", "relaxed", "loose"],
        ),
        (
            "perspective",
            defs!["dramatic", "near", "normal", "midrange", "distant", "none"],
        ),
        ("radius", defs![TshirtSize]),
        ("shadow", defs![TshirtSize]),
        ("spacing", defs!["px", Number]),
        ("text", defs![TshirtSize]),
        ("text-shadow", defs![TshirtSize]),
        (
            "tracking",
            defs!["tighter", "tight", "normal", "wide", "wider", "widest"],
        ),
    ]
    .into_iter()
    .map(|(key, values)| (key.to_string(), values))
    .collect()
}

fn layout() -> Vec<(&'static str, ClassGroup)> {
    vec![
        (
            "aspect",
            group(
                "aspect",
                defs![
                    "auto",
                    "square",
                    Fraction,
                    ArbitraryValue,
                    ArbitraryVariable,
                    theme("aspect"),
                ],
            ),
        ),
        ("container", ClassGroup::standalone(defs!["container"])),
        (
            "columns",
            group(
                "columns",
                defs![
                    Number,
                    "auto",
                    ArbitraryValue,
                    ArbitraryVariable,
                    theme("container")
                ],
            ),
        ),
        ("break-after", group("break-after", scale_break())),
        ("break-before", group("break-before", scale_break())),
        (
            "break-inside",
            group(
                "break-inside",
                defs!["auto", "avoid", "avoid-page", "avoid-column"],
            ),
        ),
        (
            "box-decoration",
            group("box-decoration", defs!["slice", "clone"]),
        ),
        ("box", group("box", defs!["border", "content"])),
        (
            "display",
            ClassGroup::standalone(defs![
                "block",
                "inline-block",
                "inline",
                "flex",
                "inline-flex",
                "table",
                "inline-table",
                "table-caption",
                "table-cell",
                "table-column",
                "table-column-group",
                "table-footer-group",
                "table-header-group",
                "table-row-group",
                "table-row",
                "flow-root",
                "grid",
                "inline-grid",
                "contents",
                "list-item",
                "hidden",
            ]),
        ),
        ("sr", ClassGroup::standalone(defs!["sr-only", "not-sr-only"])),
        (
            "float",
            group("float", defs!["right", "left", "none", "start", "end"]),
        ),
        (
            "clear",
            group(
                "clear",
                defs!["left", "right", "both", "none", "start", "end"],
            ),
        ),
        (
            "isolation",
            ClassGroup::standalone(defs!["isolate", "isolation-auto"]),
        ),
        (
            "object-fit",
            group(
                "object",
                defs!["contain", "cover", "fill", "none", "scale-down"],
            ),
        ),
        (
            "object-position",
            group("object", scale_position_with_arbitrary()),
        ),
        ("overflow", group("overflow", scale_overflow())),
        ("overflow-x", group("overflow-x", scale_overflow())),
        ("overflow-y", group("overflow-y", scale_overflow())),
        ("overscroll", group("overscroll", scale_overscroll())),
        ("overscroll-x", group("overscroll-x", scale_overscroll())),
        ("overscroll-y", group("overscroll-y", scale_overscroll())),
        (
            "position",
            ClassGroup::standalone(defs!["static", "fixed", "absolute", "relative", "sticky"]),
        ),
        ("inset", group("inset", scale_inset())),
        ("inset-x", group("inset-x", scale_inset())),
        ("inset-y", group("inset-y", scale_inset())),
        ("start", group("start", scale_inset())),
        ("end", group("end", scale_inset())),
        ("top", group("top", scale_inset())),
        ("right", group("right", scale_inset())),
        ("bottom", group("bottom", scale_inset())),
        ("left", group("left", scale_inset())),
        (
            "visibility",
            ClassGroup::standalone(defs!["visible", "invisible", "collapse"]),
        ),
        (
            "z",
            group(
                "z",
                defs![Integer, "auto", ArbitraryVariable, ArbitraryValue],
            ),
        ),
    ]
}

fn flexbox_and_grid() -> Vec<(&'static str, ClassGroup)> {
    vec![
        (
            "basis",
            group(
                "basis",
                [
                    defs![Fraction, "full", "auto", theme("container")],
                    scale_unambiguous_spacing(),
                ]
                .concat(),
            ),
        ),
        (
            "flex-direction",
            group("flex", defs!["row", "row-reverse", "col", "col-reverse"]),
        ),
        (
            "flex-wrap",
            group("flex", defs!["nowrap", "wrap", "wrap-reverse"]),
        ),
        (
            "flex",
            group(
                "flex",
                defs![Number, Fraction, "auto", "initial", "none", ArbitraryValue],
            ),
        ),
        ("grow", group("grow", scale_filter_toggle())),
        ("shrink", group("shrink", scale_filter_toggle())),
        (
            "order",
            group(
                "order",
                defs![
                    Integer,
                    "first",
                    "last",
                    "none",
                    ArbitraryVariable,
                    ArbitraryValue,
                ],
            ),
        ),
        ("grid-cols", group("grid-cols", scale_grid_template_cols_rows())),
        ("col-start-end", group("col", scale_grid_col_row_start_and_end())),
        ("col-start", group("col-start", scale_grid_col_row_start_or_end())),
        ("col-end", group("col-end", scale_grid_col_row_start_or_end())),
        ("grid-rows", group("grid-rows", scale_grid_template_cols_rows())),
        ("row-start-end", group("row", scale_grid_col_row_start_and_end())),
        ("row-start", group("row-start", scale_grid_col_row_start_or_end())),
        ("row-end", group("row-end", scale_grid_col_row_start_or_end())),
        (
            "grid-flow",
            group(
                "grid-flow",
                defs!["row", "col", "dense", "row-dense", "col-dense"],
            ),
        ),
        ("auto-cols", group("auto-cols", scale_grid_auto_cols_rows())),
        ("auto-rows", group("auto-rows", scale_grid_auto_cols_rows())),
        ("gap", group("gap", scale_unambiguous_spacing())),
        ("gap-x", group("gap-x", scale_unambiguous_spacing())),
        ("gap-y", group("gap-y", scale_unambiguous_spacing())),
        (
            "justify-content",
            group(
                "justify",
                [scale_align_primary_axis(), defs!["normal"]].concat(),
            ),
        ),
        (
            "justify-items",
            group(
                "justify-items",
                [scale_align_secondary_axis(), defs!["normal"]].concat(),
            ),
        ),
        (
            "justify-self",
            group(
                "justify-self",
                [defs!["auto"], scale_align_secondary_axis()].concat(),
            ),
        ),
        (
            "align-content",
            group(
                "content",
                [defs!["normal"], scale_align_primary_axis()].concat(),
            ),
        ),
        (
            "align-items",
            group(
                "items",
                [
                    scale_align_secondary_axis(),
                    defs![group("baseline", defs!["", "last"])],
                ]
                .concat(),
            ),
        ),
        (
            "align-self",
            group(
                "self",
                [
                    defs!["auto"],
                    scale_align_secondary_axis(),
                    defs![group("baseline", defs!["", "last"])],
                ]
                .concat(),
            ),
        ),
        (
            "place-content",
            group("place-content", scale_align_primary_axis()),
        ),
        (
            "place-items",
            group(
                "place-items",
                [scale_align_secondary_axis(), defs!["baseline"]].concat(),
            ),
        ),
        (
            "place-self",
            group(
                "place-self",
                [defs!["auto"], scale_align_secondary_axis()].concat(),
            ),
        ),
    ]
}

fn spacing() -> Vec<(&'static str, ClassGroup)> {
    let mut groups = Vec::new();
    for side in ["p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl"] {
        groups.push((side, group(side, scale_unambiguous_spacing())));
    }
    for side in ["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"] {
        groups.push((side, group(side, scale_margin())));
    }
    groups.extend([
        ("space-x", group("space-x", scale_unambiguous_spacing())),
        (
            "space-x-reverse",
            ClassGroup::standalone(defs!["space-x-reverse"]),
        ),
        ("space-y", group("space-y", scale_unambiguous_spacing())),
        (
            "space-y-reverse",
            ClassGroup::standalone(defs!["space-y-reverse"]),
        ),
    ]);
    groups
}

fn sizing() -> Vec<(&'static str, ClassGroup)> {
    vec![
        ("size", group("size", scale_sizing())),
        (
            "w",
            group(
                "w",
                [defs![theme("container"), "screen"], scale_sizing()].concat(),
            ),
        ),
        (
            "min-w",
            group(
                "min-w",
                [defs![theme("container"), "screen", "none"], scale_sizing()].concat(),
            ),
        ),
        (
            "max-w",
            group(
                "max-w",
                [
                    defs![
                        theme("container"),
                        "screen",
                        "none",
                        "prose",
                        group("screen", defs![theme("breakpoint")]),
                    ],
                    scale_sizing(),
                ]
                .concat(),
            ),
        ),
        (
            "h",
            group("h", [defs!["screen", "lh"], scale_sizing()].concat()),
        ),
        (
            "min-h",
            group(
                "min-h",
                [defs!["screen", "lh", "none"], scale_sizing()].concat(),
            ),
        ),
        (
            "max-h",
            group("max-h", [defs!["screen", "lh"], scale_sizing()].concat()),
        ),
    ]
}

fn typography() -> Vec<(&'static str, ClassGroup)> {
    vec![
        (
            "font-size",
            group(
                "text",
                defs![
                    "base",
                    theme("text"),
                    ArbitraryVariableLength,
                    ArbitraryLength
                ],
            ),
        ),
        (
            "font-smoothing",
            ClassGroup::standalone(defs!["antialiased", "subpixel-antialiased"]),
        ),
        (
            "font-style",
            ClassGroup::standalone(defs!["italic", "not-italic"]),
        ),
        (
            "font-weight",
            group(
                "font",
                defs![theme("font-weight"), ArbitraryVariable, ArbitraryNumber],
            ),
        ),
        (
            "font-stretch",
            group(
                "font-stretch",
                defs![
                    "ultra-condensed",
                    "extra-condensed",
                    "condensed",
                    "semi-condensed",
                    "normal",
                    "semi-expanded",
                    "expanded",
                    "extra-expanded",
                    "ultra-expanded",
                    Percent,
                    ArbitraryValue,
                ],
            ),
        ),
        (
            "font-family",
            group(
                "font",
                defs![ArbitraryVariableFamilyName, ArbitraryValue, theme("font")],
            ),
        ),
        ("fvn-normal", ClassGroup::standalone(defs!["normal-nums"])),
        ("fvn-ordinal", ClassGroup::standalone(defs!["ordinal"])),
        (
            "fvn-slashed-zero",
            ClassGroup::standalone(defs!["slashed-zero"]),
        ),
        (
            "fvn-figure",
            ClassGroup::standalone(defs!["lining-nums", "oldstyle-nums"]),
        ),
        (
            "fvn-spacing",
            ClassGroup::standalone(defs!["proportional-nums", "tabular-nums"]),
        ),
        (
            "fvn-fraction",
            ClassGroup::standalone(defs!["diagonal-fractions", "stacked-fractions"]),
        ),
        (
            "tracking",
            group(
                "tracking",
                defs![theme("tracking"), ArbitraryVariable, ArbitraryValue],
            ),
        ),
        (
            "line-clamp",
            group(
                "line-clamp",
                defs![Number, "none", ArbitraryVariable, ArbitraryNumber],
            ),
        ),
        (
            "leading",
            group(
                "leading",
                [defs![theme("leading")], scale_unambiguous_spacing()].concat(),
            ),
        ),
        (
            "list-image",
            group(
                "list-image",
                defs!["none", ArbitraryVariable, ArbitraryValue],
            ),
        ),
        (
            "list-style-position",
            group("list", defs!["inside", "outside"]),
        ),
        (
            "list-style-type",
            group(
                "list",
                defs!["disc", "decimal", "none", ArbitraryVariable, ArbitraryValue],
            ),
        ),
        (
            "text-alignment",
            group(
                "text",
                defs!["left", "center", "right", "justify", "start", "end"],
            ),
        ),
        ("placeholder-color", group("placeholder", scale_color())),
        ("text-color", group("text", scale_color())),
        (
            "text-decoration",
            ClassGroup::standalone(defs![
                "underline",
                "overline",
                "line-through",
                "no-underline"
            ]),
        ),
        (
            "text-decoration-style",
            group("decoration", [scale_line_style(), defs!["wavy"]].concat()),
        ),
        (
            "text-decoration-thickness",
            group(
                "decoration",
                defs![
                    Number,
                    "from-font",
                    "auto",
                    ArbitraryVariable,
                    ArbitraryLength
                ],
            ),
        ),
        ("text-decoration-color", group("decoration", scale_color())),
        (
            "underline-offset",
            group(
                "underline-offset",
                defs![Number, "auto", ArbitraryVariable, ArbitraryValue],
            ),
        ),
        (
            "text-transform",
            ClassGroup::standalone(defs![
                "uppercase",
                "lowercase",
                "capitalize",
                "normal-case"
            ]),
        ),
        (
            "text-overflow",
            ClassGroup::standalone(defs!["truncate", "text-ellipsis", "text-clip"]),
        ),
        (
            "text-wrap",
            group("text", defs!["wrap", "nowrap", "balance", "pretty"]),
        ),
        ("indent", group("indent", scale_unambiguous_spacing())),
        (
            "vertical-align",
            group(
                "align",
                defs![
                    "baseline",
                    "top",
                    "middle",
                    "bottom",
                    "text-top",
                    "text-bottom",
                    "sub",
                    "super",
                    ArbitraryVariable,
                    ArbitraryValue,
                ],
            ),
        ),
        (
            "whitespace",
            group(
                "whitespace",
                defs![
                    "normal",
                    "nowrap",
                    "pre",
                    "pre-line",
                    "pre-wrap",
                    "break-spaces"
                ],
            ),
        ),
        (
            "break",
            group("break", defs!["normal", "words", "all", "keep"]),
        ),
        (
            "wrap",
            group("wrap", defs!["break-word", "anywhere", "normal"]),
        ),
        (
            "hyphens",
            group("hyphens", defs!["none", "manual", "auto"]),
        ),
        (
            "content",
            group("content", defs!["none", ArbitraryVariable, ArbitraryValue]),
        ),
    ]
}

fn backgrounds() -> Vec<(&'static str, ClassGroup)> {
    vec![
        (
            "bg-attachment",
            group("bg", defs!["fixed", "local", "scroll"]),
        ),
        (
            "bg-clip",
            group("bg-clip", defs!["border", "padding", "content", "text"]),
        ),
        (
            "bg-origin",
            group("bg-origin", defs!["border", "padding", "content"]),
        ),
        ("bg-position", group("bg", scale_bg_position())),
        ("bg-repeat", group("bg", scale_bg_repeat())),
        ("bg-size", group("bg", scale_bg_size())),
        (
            "bg-image",
            group(
                "bg",
                defs![
                    "none",
                    group(
                        "linear",
                        defs![
                            group("to", defs!["t", "tr", "r", "br", "b", "bl", "l", "tl"]),
                            Integer,
                            ArbitraryVariable,
                            ArbitraryValue,
                        ],
                    ),
                    group("radial", defs!["", ArbitraryVariable, ArbitraryValue]),
                    group("conic", defs![Integer, ArbitraryVariable, ArbitraryValue]),
                    ArbitraryVariableImage,
                    ArbitraryImage,
                ],
            ),
        ),
        ("bg-color", group("bg", scale_color())),
        (
            "gradient-from-pos",
            group("from", scale_gradient_stop_position()),
        ),
        (
            "gradient-via-pos",
            group("via", scale_gradient_stop_position()),
        ),
        ("gradient-to-pos", group("to", scale_gradient_stop_position())),
        ("gradient-from", group("from", scale_color())),
        ("gradient-via", group("via", scale_color())),
        ("gradient-to", group("to", scale_color())),
    ]
}

fn borders() -> Vec<(&'static str, ClassGroup)> {
    let mut groups = vec![("rounded", group("rounded", scale_radius()))];
    for (id, base) in [
        ("rounded-s", "rounded-s"),
        ("rounded-e", "rounded-e"),
        ("rounded-t", "rounded-t"),
        ("rounded-r", "rounded-r"),
        ("rounded-b", "rounded-b"),
        ("rounded-l", "rounded-l"),
        ("rounded-ss", "rounded-ss"),
        ("rounded-se", "rounded-se"),
        ("rounded-ee", "rounded-ee"),
        ("rounded-es", "rounded-es"),
        ("rounded-tl", "rounded-tl"),
        ("rounded-tr", "rounded-tr"),
        ("rounded-br", "rounded-br"),
        ("rounded-bl", "rounded-bl"),
    ] {
        groups.push((id, group(base, scale_radius())));
    }

    groups.push(("border-w", group("border", scale_border_width())));
    for (id, base) in [
        ("border-w-x", "border-x"),
        ("border-w-y", "border-y"),
        ("border-w-s", "border-s"),
        ("border-w-e", "border-e"),
        ("border-w-t", "border-t"),
        ("border-w-r", "border-r"),
        ("border-w-b", "border-b"),
        ("border-w-l", "border-l"),
    ] {
        groups.push((id, group(base, scale_border_width())));
    }

    groups.extend([
        ("divide-x", group("divide-x", scale_border_width())),
        (
            "divide-x-reverse",
            ClassGroup::standalone(defs!["divide-x-reverse"]),
        ),
        ("divide-y", group("divide-y", scale_border_width())),
        (
            "divide-y-reverse",
            ClassGroup::standalone(defs!["divide-y-reverse"]),
        ),
        (
            "border-style",
            group(
                "border",
                [scale_line_style(), defs!["hidden", "none"]].concat(),
            ),
        ),
        (
            "divide-style",
            group(
                "divide",
                [scale_line_style(), defs!["hidden", "none"]].concat(),
            ),
        ),
        ("border-color", group("border", scale_color())),
    ]);

    for (id, base) in [
        ("border-color-x", "border-x"),
        ("border-color-y", "border-y"),
        ("border-color-s", "border-s"),
        ("border-color-e", "border-e"),
        ("border-color-t", "border-t"),
        ("border-color-r", "border-r"),
        ("border-color-b", "border-b"),
        ("border-color-l", "border-l"),
    ] {
        groups.push((id, group(base, scale_color())));
    }

    groups.extend([
        ("divide-color", group("divide", scale_color())),
        (
            "outline-style",
            group(
                "outline",
                [scale_line_style(), defs!["none", "hidden"]].concat(),
            ),
        ),
        (
            "outline-offset",
            group(
                "outline-offset",
                defs![Number, ArbitraryVariable, ArbitraryValue],
            ),
        ),
        (
            "outline-w",
            group(
                "outline",
                defs!["", Number, ArbitraryVariableLength, ArbitraryLength],
            ),
        ),
        ("outline-color", group("outline", scale_color())),
    ]);
    groups
}

fn effects() -> Vec<(&'static str, ClassGroup)> {
    vec![
        (
            "shadow",
            group(
                "shadow",
                defs![
                    "",
                    "none",
                    theme("shadow"),
                    ArbitraryVariableShadow,
                    ArbitraryShadow,
                ],
            ),
        ),
        ("shadow-color", group("shadow", scale_color())),
        (
            "inset-shadow",
            group(
                "inset-shadow",
                defs![
                    "none",
                    theme("inset-shadow"),
                    ArbitraryVariableShadow,
                    ArbitraryShadow,
                ],
            ),
        ),
        ("inset-shadow-color", group("inset-shadow", scale_color())),
        ("ring-w", group("ring", scale_border_width())),
        ("ring-w-inset", ClassGroup::standalone(defs!["ring-inset"])),
        ("ring-color", group("ring", scale_color())),
        (
            "ring-offset-w",
            group("ring-offset", defs![Number, ArbitraryLength]),
        ),
        ("ring-offset-color", group("ring-offset", scale_color())),
        ("inset-ring-w", group("inset-ring", scale_border_width())),
        ("inset-ring-color", group("inset-ring", scale_color())),
        (
            "text-shadow",
            group(
                "text-shadow",
                defs![
                    "none",
                    theme("text-shadow"),
                    ArbitraryVariableShadow,
                    ArbitraryShadow,
                ],
            ),
        ),
        ("text-shadow-color", group("text-shadow", scale_color())),
        ("opacity", group("opacity", scale_filter_amount())),
        (
            "mix-blend",
            group(
                "mix-blend",
                [scale_blend_mode(), defs!["plus-darker", "plus-lighter"]].concat(),
            ),
        ),
        ("bg-blend", group("bg-blend", scale_blend_mode())),
    ]
}

fn masks() -> Vec<(&'static str, ClassGroup)> {
    let mut groups = vec![
        (
            "mask-clip",
            ClassGroup::standalone(defs![
                group(
                    "mask-clip",
                    defs!["border", "padding", "content", "fill", "stroke", "view"],
                ),
                "mask-no-clip",
            ]),
        ),
        (
            "mask-composite",
            group("mask", defs!["add", "subtract", "intersect", "exclude"]),
        ),
        ("mask-image-linear-pos", group("mask-linear", defs![Number])),
        (
            "mask-image-linear-from-pos",
            group("mask-linear-from", scale_mask_image_position()),
        ),
        (
            "mask-image-linear-to-pos",
            group("mask-linear-to", scale_mask_image_position()),
        ),
        (
            "mask-image-linear-from-color",
            group("mask-linear-from", scale_color()),
        ),
        (
            "mask-image-linear-to-color",
            group("mask-linear-to", scale_color()),
        ),
    ];

    for (side, ids) in [
        (
            "t",
            [
                "mask-image-t-from-pos",
                "mask-image-t-to-pos",
                "mask-image-t-from-color",
                "mask-image-t-to-color",
            ],
        ),
        (
            "r",
            [
                "mask-image-r-from-pos",
                "mask-image-r-to-pos",
                "mask-image-r-from-color",
                "mask-image-r-to-color",
            ],
        ),
        (
            "b",
            [
                "mask-image-b-from-pos",
                "mask-image-b-to-pos",
                "mask-image-b-from-color",
                "mask-image-b-to-color",
            ],
        ),
        (
            "l",
            [
                "mask-image-l-from-pos",
                "mask-image-l-to-pos",
                "mask-image-l-from-color",
                "mask-image-l-to-color",
            ],
        ),
        (
            "x",
            [
                "mask-image-x-from-pos",
                "mask-image-x-to-pos",
                "mask-image-x-from-color",
                "mask-image-x-to-color",
            ],
        ),
        (
            "y",
            [
                "mask-image-y-from-pos",
                "mask-image-y-to-pos",
                "mask-image-y-from-color",
                "mask-image-y-to-color",
            ],
        ),
    ] {
        let from = format!("mask-{side}-from");
        let to = format!("mask-{side}-to");
        groups.extend([
            (ids[0], group(&from, scale_mask_image_position())),
            (ids[1], group(&to, scale_mask_image_position())),
            (ids[2], group(&from, scale_color())),
            (ids[3], group(&to, scale_color())),
        ]);
    }

    groups.extend([
        (
            "mask-image-radial",
            group("mask-radial", defs![ArbitraryVariable, ArbitraryValue]),
        ),
        (
            "mask-image-radial-from-pos",
            group("mask-radial-from", scale_mask_image_position()),
        ),
        (
            "mask-image-radial-to-pos",
            group("mask-radial-to", scale_mask_image_position()),
        ),
        (
            "mask-image-radial-from-color",
            group("mask-radial-from", scale_color()),
        ),
        (
            "mask-image-radial-to-color",
            group("mask-radial-to", scale_color()),
        ),
        (
            "mask-image-radial-shape",
            group("mask-radial", defs!["circle", "ellipse"]),
        ),
        (
            "mask-image-radial-size",
            group(
                "mask-radial",
                defs![
                    group("closest", defs!["side", "corner"]),
                    group("farthest", defs!["side", "corner"]),
                ],
            ),
        ),
        (
            "mask-image-radial-pos",
            group("mask-radial-at", scale_position()),
        ),
        ("mask-image-conic-pos", group("mask-conic", defs![Number])),
        (
            "mask-image-conic-from-pos",
            group("mask-conic-from", scale_mask_image_position()),
        ),
        (
            "mask-image-conic-to-pos",
            group("mask-conic-to", scale_mask_image_position()),
        ),
        (
            "mask-image-conic-from-color",
            group("mask-conic-from", scale_color()),
        ),
        (
            "mask-image-conic-to-color",
            group("mask-conic-to", scale_color()),
        ),
        (
            "mask-mode",
            group("mask", defs!["alpha", "luminance", "match"]),
        ),
        (
            "mask-origin",
            group(
                "mask-origin",
                defs!["border", "padding", "content", "fill", "stroke", "view"],
            ),
        ),
        ("mask-position", group("mask", scale_bg_position())),
        ("mask-repeat", group("mask", scale_bg_repeat())),
        ("mask-size", group("mask", scale_bg_size())),
        ("mask-type", group("mask-type", defs!["alpha", "luminance"])),
        (
            "mask-image",
            group("mask", defs!["none", ArbitraryVariable, ArbitraryValue]),
        ),
    ]);
    groups
}

fn filters() -> Vec<(&'static str, ClassGroup)> {
    vec![
        (
            "filter",
            group(
                "filter",
                defs!["", "none", ArbitraryVariable, ArbitraryValue],
            ),
        ),
        ("blur", group("blur", scale_blur())),
        ("brightness", group("brightness", scale_filter_amount())),
        ("contrast", group("contrast", scale_filter_amount())),
        (
            "drop-shadow",
            group(
                "drop-shadow",
                defs![
                    "",
                    "none",
                    theme("drop-shadow"),
                    ArbitraryVariableShadow,
                    ArbitraryShadow,
                ],
            ),
        ),
        ("drop-shadow-color", group("drop-shadow", scale_color())),
        ("grayscale", group("grayscale", scale_filter_toggle())),
        ("hue-rotate", group("hue-rotate", scale_filter_amount())),
        ("invert", group("invert", scale_filter_toggle())),
        ("saturate", group("saturate", scale_filter_amount())),
        ("sepia", group("sepia", scale_filter_toggle())),
        (
            "backdrop-filter",
            group(
                "backdrop-filter",
                defs!["", "none", ArbitraryVariable, ArbitraryValue],
            ),
        ),
        ("backdrop-blur", group("backdrop-blur", scale_blur())),
        (
            "backdrop-brightness",
            group("backdrop-brightness", scale_filter_amount()),
        ),
        (
            "backdrop-contrast",
            group("backdrop-contrast", scale_filter_amount()),
        ),
        (
            "backdrop-grayscale",
            group("backdrop-grayscale", scale_filter_toggle()),
        ),
        (
            "backdrop-hue-rotate",
            group("backdrop-hue-rotate", scale_filter_amount()),
        ),
        (
            "backdrop-invert",
            group("backdrop-invert", scale_filter_toggle()),
        ),
        (
            "backdrop-opacity",
            group("backdrop-opacity", scale_filter_amount()),
        ),
        (
            "backdrop-saturate",
            group("backdrop-saturate", scale_filter_amount()),
        ),
        (
            "backdrop-sepia",
            group("backdrop-sepia", scale_filter_toggle()),
        ),
    ]
}

fn tables() -> Vec<(&'static str, ClassGroup)> {
    vec![
        (
            "border-collapse",
            group("border", defs!["collapse", "separate"]),
        ),
        (
            "border-spacing",
            group("border-spacing", scale_unambiguous_spacing()),
        ),
        (
            "border-spacing-x",
            group("border-spacing-x", scale_unambiguous_spacing()),
        ),
        (
            "border-spacing-y",
            group("border-spacing-y", scale_unambiguous_spacing()),
        ),
        ("table-layout", group("table", defs!["auto", "fixed"])),
        ("caption", group("caption", defs!["top", "bottom"])),
    ]
}

fn transitions_and_animation() -> Vec<(&'static str, ClassGroup)> {
    vec![
        (
            "transition",
            group(
                "transition",
                defs![
                    "",
                    "all",
                    "colors",
                    "opacity",
                    "shadow",
                    "transform",
                    "none",
                    ArbitraryVariable,
                    ArbitraryValue,
                ],
            ),
        ),
        (
            "transition-behavior",
            group("transition", defs!["normal", "discrete"]),
        ),
        (
            "duration",
            group(
                "duration",
                defs![Number, "initial", ArbitraryVariable, ArbitraryValue],
            ),
        ),
        (
            "ease",
            group(
                "ease",
                defs![
                    "linear",
                    "initial",
                    theme("ease"),
                    ArbitraryVariable,
                    ArbitraryValue,
                ],
            ),
        ),
        ("delay", group("delay", scale_filter_amount())),
        (
            "animate",
            group(
                "animate",
                defs!["none", theme("animate"), ArbitraryVariable, ArbitraryValue],
            ),
        ),
    ]
}

fn transforms() -> Vec<(&'static str, ClassGroup)> {
    vec![
        ("backface", group("backface", defs!["hidden", "visible"])),
        (
            "perspective",
            group(
                "perspective",
                defs![theme("perspective"), ArbitraryVariable, ArbitraryValue],
            ),
        ),
        (
            "perspective-origin",
            group("perspective-origin", scale_position_with_arbitrary()),
        ),
        ("rotate", group("rotate", scale_rotate())),
        ("rotate-x", group("rotate-x", scale_rotate())),
        ("rotate-y", group("rotate-y", scale_rotate())),
        ("rotate-z", group("rotate-z", scale_rotate())),
        ("scale", group("scale", scale_scale())),
        ("scale-x", group("scale-x", scale_scale())),
        ("scale-y", group("scale-y", scale_scale())),
        ("scale-z", group("scale-z", scale_scale())),
        ("scale-3d", ClassGroup::standalone(defs!["scale-3d"])),
        ("skew", group("skew", scale_skew())),
        ("skew-x", group("skew-x", scale_skew())),
        ("skew-y", group("skew-y", scale_skew())),
        (
            "transform",
            group(
                "transform",
                defs![ArbitraryVariable, ArbitraryValue, "", "none", "gpu", "cpu"],
            ),
        ),
        (
            "transform-origin",
            group("origin", scale_position_with_arbitrary()),
        ),
        ("transform-style", group("transform", defs!["3d", "flat"])),
        ("translate", group("translate", scale_translate())),
        ("translate-x", group("translate-x", scale_translate())),
        ("translate-y", group("translate-y", scale_translate())),
        ("translate-z", group("translate-z", scale_translate())),
        ("translate-none", ClassGroup::standalone(defs!["translate-none"])),
    ]
}

fn interactivity() -> Vec<(&'static str, ClassGroup)> {
    let mut groups = vec![
        ("accent", group("accent", scale_color())),
        ("appearance", group("appearance", defs!["none", "auto"])),
        ("caret-color", group("caret", scale_color())),
        (
            "color-scheme",
            group(
                "scheme",
                defs!["normal", "dark", "light", "light-dark", "only-dark", "only-light"],
            ),
        ),
        (
            "cursor",
            group(
                "cursor",
                defs![
                    "auto",
                    "default",
                    "pointer",
                    "wait",
                    "text",
                    "move",
                    "help",
                    "not-allowed",
                    "none",
                    "context-menu",
                    "progress",
                    "cell",
                    "crosshair",
                    "vertical-text",
                    "alias",
                    "copy",
                    "no-drop",
                    "grab",
                    "grabbing",
                    "all-scroll",
                    "col-resize",
                    "row-resize",
                    "n-resize",
                    "e-resize",
                    "s-resize",
                    "w-resize",
                    "ne-resize",
                    "nw-resize",
                    "se-resize",
                    "sw-resize",
                    "ew-resize",
                    "ns-resize",
                    "nesw-resize",
                    "nwse-resize",
                    "zoom-in",
                    "zoom-out",
                    ArbitraryVariable,
                    ArbitraryValue,
                ],
            ),
        ),
        (
            "field-sizing",
            group("field-sizing", defs!["fixed", "content"]),
        ),
        (
            "pointer-events",
            group("pointer-events", defs!["auto", "none"]),
        ),
        ("resize", group("resize", defs!["none", "", "y", "x"])),
        ("scroll-behavior", group("scroll", defs!["auto", "smooth"])),
    ];

    for side in [
        "scroll-m", "scroll-mx", "scroll-my", "scroll-ms", "scroll-me", "scroll-mt", "scroll-mr",
        "scroll-mb", "scroll-ml", "scroll-p", "scroll-px", "scroll-py", "scroll-ps", "scroll-pe",
        "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl",
    ] {
        groups.push((side, group(side, scale_unambiguous_spacing())));
    }

    groups.extend([
        (
            "snap-align",
            group("snap", defs!["start", "end", "center", "align-none"]),
        ),
        ("snap-stop", group("snap", defs!["normal", "always"])),
        ("snap-type", group("snap", defs!["none", "x", "y", "both"])),
        (
            "snap-strictness",
            group("snap", defs!["mandatory", "proximity"]),
        ),
        (
            "touch",
            group("touch", defs!["auto", "none", "manipulation"]),
        ),
        ("touch-x", group("touch-pan", defs!["x", "left", "right"])),
        ("touch-y", group("touch-pan", defs!["y", "up", "down"])),
        ("touch-pz", ClassGroup::standalone(defs!["touch-pinch-zoom"])),
        (
            "select",
            group("select", defs!["none", "text", "all", "auto"]),
        ),
        (
            "will-change",
            group(
                "will-change",
                defs![
                    "auto",
                    "scroll",
                    "contents",
                    "transform",
                    ArbitraryVariable,
                    ArbitraryValue,
                ],
            ),
        ),
    ]);
    groups
}

fn svg_and_accessibility() -> Vec<(&'static str, ClassGroup)> {
    vec![
        ("fill", group("fill", [defs!["none"], scale_color()].concat())),
        (
            "stroke-w",
            group(
                "stroke",
                defs![
                    Number,
                    ArbitraryVariableLength,
                    ArbitraryLength,
                    ArbitraryNumber
                ],
            ),
        ),
        (
            "stroke",
            group("stroke", [defs!["none"], scale_color()].concat()),
        ),
        (
            "forced-color-adjust",
            group("forced-color-adjust", defs!["auto", "none"]),
        ),
    ]
}

fn conflicting_class_groups() -> HashMap<String, Vec<String>> {
    let edges: &[(&str, &[&str])] = &[
        ("overflow", &["overflow-x", "overflow-y"]),
        ("overscroll", &["overscroll-x", "overscroll-y"]),
        (
            "inset",
            &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        ),
        ("inset-x", &["right", "left"]),
        ("inset-y", &["top", "bottom"]),
        ("flex", &["basis", "grow", "shrink"]),
        ("gap", &["gap-x", "gap-y"]),
        ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
        ("px", &["pr", "pl"]),
        ("py", &["pt", "pb"]),
        ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
        ("mx", &["mr", "ml"]),
        ("my", &["mt", "mb"]),
        ("size", &["w", "h"]),
        ("font-size", &["leading"]),
        (
            "fvn-normal",
            &[
                "fvn-ordinal",
                "fvn-slashed-zero",
                "fvn-figure",
                "fvn-spacing",
                "fvn-fraction",
            ],
        ),
        ("fvn-ordinal", &["fvn-normal"]),
        ("fvn-slashed-zero", &["fvn-normal"]),
        ("fvn-figure", &["fvn-normal"]),
        ("fvn-spacing", &["fvn-normal"]),
        ("fvn-fraction", &["fvn-normal"]),
        ("line-clamp", &["display", "overflow"]),
        (
            "rounded",
            &[
                "rounded-s",
                "rounded-e",
                "rounded-t",
                "rounded-r",
                "rounded-b",
                "rounded-l",
                "rounded-ss",
                "rounded-se",
                "rounded-ee",
                "rounded-es",
                "rounded-tl",
                "rounded-tr",
                "rounded-br",
                "rounded-bl",
            ],
        ),
        ("rounded-s", &["rounded-ss", "rounded-es"]),
        ("rounded-e", &["rounded-se", "rounded-ee"]),
        ("rounded-t", &["rounded-tl", "rounded-tr"]),
        ("rounded-r", &["rounded-tr", "rounded-br"]),
        ("rounded-b", &["rounded-br", "rounded-bl"]),
        ("rounded-l", &["rounded-tl", "rounded-bl"]),
        ("border-spacing", &["border-spacing-x", "border-spacing-y"]),
        (
            "border-w",
            &[
                "border-w-x",
                "border-w-y",
                "border-w-s",
                "border-w-e",
                "border-w-t",
                "border-w-r",
                "border-w-b",
                "border-w-l",
            ],
        ),
        ("border-w-x", &["border-w-r", "border-w-l"]),
        ("border-w-y", &["border-w-t", "border-w-b"]),
        (
            "border-color",
            &[
                "border-color-x",
                "border-color-y",
                "border-color-s",
                "border-color-e",
                "border-color-t",
                "border-color-r",
                "border-color-b",
                "border-color-l",
            ],
        ),
        ("border-color-x", &["border-color-r", "border-color-l"]),
        ("border-color-y", &["border-color-t", "border-color-b"]),
        ("translate", &["translate-x", "translate-y", "translate-none"]),
        (
            "translate-none",
            &["translate", "translate-x", "translate-y", "translate-z"],
        ),
        (
            "scroll-m",
            &[
                "scroll-mx",
                "scroll-my",
                "scroll-ms",
                "scroll-me",
                "scroll-mt",
                "scroll-mr",
                "scroll-mb",
                "scroll-ml",
            ],
        ),
        ("scroll-mx", &["scroll-mr", "scroll-ml"]),
        ("scroll-my", &["scroll-mt", "scroll-mb"]),
        (
            "scroll-p",
            &[
                "scroll-px",
                "scroll-py",
                "scroll-ps",
                "scroll-pe",
                "scroll-pt",
                "scroll-pr",
                "scroll-pb",
                "scroll-pl",
            ],
        ),
        ("scroll-px", &["scroll-pr", "scroll-pl"]),
        ("scroll-py", &["scroll-pt", "scroll-pb"]),
        ("touch", &["touch-x", "touch-y", "touch-pz"]),
        ("touch-x", &["touch"]),
        ("touch-y", &["touch"]),
        ("touch-pz", &["touch"]),
    ];
    edges
        .iter()
        .map(|(id, conflicts)| (id.to_string(), strings(conflicts)))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        let class_groups = [
            layout(),
            flexbox_and_grid(),
            spacing(),
            sizing(),
            typography(),
            backgrounds(),
            borders(),
            effects(),
            masks(),
            filters(),
            tables(),
            transitions_and_animation(),
            transforms(),
            interactivity(),
            svg_and_accessibility(),
        ]
        .into_iter()
        .flatten()
        .map(|(id, group)| (id.to_string(), group))
        .collect();

        Config {
            cache_size: DEFAULT_CACHE_SIZE,
            separator: ":".to_string(),
            prefix: None,
            class_groups,
            conflicting_class_groups: conflicting_class_groups(),
            conflicting_class_group_modifiers: HashMap::from([(
                "font-size".to_string(),
                strings(&["leading"]),
            )]),
            theme: default_theme(),
            order_sensitive_modifiers: strings(&[
                "*",
                "**",
                "after",
                "backdrop",
                "before",
                "details-content",
                "file",
                "first-letter",
                "first-line",
                "marker",
                "placeholder",
                "selection",
            ]),
        }
    }
}
