//! Pure text transformation rules, registered by a stable identifier.
//!
//! The engine only knows kinds; the actual text munging lives here so each
//! rule can be tested on its own.

pub mod case;
pub mod cleanup;

use std::fmt;
use std::str::FromStr;

/// A pure text transformation
pub type TransformFn = fn(&str) -> String;

// ============================================================================
// Case transforms (toggleable)
// ============================================================================

/// Case transformations that can be toggled on and off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    Upper,
    Lower,
    Title,
    Sentence,
    Toggle,
    Camel,
    Snake,
    Kebab,
}

/// Registry entry for a case transform
#[derive(Debug, Clone, Copy)]
pub struct CaseDef {
    pub kind: CaseKind,
    pub name: &'static str,
    pub label: &'static str,
    pub apply: TransformFn,
}

/// Static registry of all case transforms
pub static CASE_TRANSFORMS: &[CaseDef] = &[
    CaseDef {
        kind: CaseKind::Upper,
        name: "upper",
        label: "UPPERCASE",
        apply: case::upper_case,
    },
    CaseDef {
        kind: CaseKind::Lower,
        name: "lower",
        label: "lowercase",
        apply: case::lower_case,
    },
    CaseDef {
        kind: CaseKind::Title,
        name: "title",
        label: "Title Case",
        apply: case::title_case,
    },
    CaseDef {
        kind: CaseKind::Sentence,
        name: "sentence",
        label: "Sentence case",
        apply: case::sentence_case,
    },
    CaseDef {
        kind: CaseKind::Toggle,
        name: "toggle",
        label: "tOGGLE cASE",
        apply: case::toggle_case,
    },
    CaseDef {
        kind: CaseKind::Camel,
        name: "camel",
        label: "camelCase",
        apply: case::camel_case,
    },
    CaseDef {
        kind: CaseKind::Snake,
        name: "snake",
        label: "snake_case",
        apply: case::snake_case,
    },
    CaseDef {
        kind: CaseKind::Kebab,
        name: "kebab",
        label: "kebab-case",
        apply: case::kebab_case,
    },
];

impl CaseKind {
    /// All kinds in registry order
    pub fn all() -> impl Iterator<Item = CaseKind> {
        CASE_TRANSFORMS.iter().map(|def| def.kind)
    }

    /// Position in [`CASE_TRANSFORMS`]
    const fn index(self) -> usize {
        match self {
            CaseKind::Upper => 0,
            CaseKind::Lower => 1,
            CaseKind::Title => 2,
            CaseKind::Sentence => 3,
            CaseKind::Toggle => 4,
            CaseKind::Camel => 5,
            CaseKind::Snake => 6,
            CaseKind::Kebab => 7,
        }
    }

    fn def(self) -> &'static CaseDef {
        &CASE_TRANSFORMS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }

    /// The registered transform function for this kind
    pub fn transform_fn(self) -> TransformFn {
        self.def().apply
    }

    pub fn apply(self, input: &str) -> String {
        (self.def().apply)(input)
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CASE_TRANSFORMS
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(s))
            .map(|def| def.kind)
            .ok_or_else(|| format!("unknown case transform: {}", s))
    }
}

// ============================================================================
// Cleanups (undo-only)
// ============================================================================

/// Text normalizations that can only be reverted through undo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleanupKind {
    CollapseWhitespace,
    RemoveEmptyLines,
    RemoveLineBreaks,
    SortLines,
    DedupeLines,
    NumberLines,
}

/// Registry entry for a cleanup rule
#[derive(Debug, Clone, Copy)]
pub struct CleanupDef {
    pub kind: CleanupKind,
    pub name: &'static str,
    pub label: &'static str,
    pub apply: TransformFn,
}

/// Static registry of all cleanup rules
pub static CLEANUPS: &[CleanupDef] = &[
    CleanupDef {
        kind: CleanupKind::CollapseWhitespace,
        name: "collapse-whitespace",
        label: "Remove Extra Spaces",
        apply: cleanup::collapse_whitespace,
    },
    CleanupDef {
        kind: CleanupKind::RemoveEmptyLines,
        name: "remove-empty-lines",
        label: "Remove Empty Lines",
        apply: cleanup::remove_empty_lines,
    },
    CleanupDef {
        kind: CleanupKind::RemoveLineBreaks,
        name: "remove-line-breaks",
        label: "Remove Line Breaks",
        apply: cleanup::remove_line_breaks,
    },
    CleanupDef {
        kind: CleanupKind::SortLines,
        name: "sort",
        label: "Sort Lines",
        apply: cleanup::sort_lines,
    },
    CleanupDef {
        kind: CleanupKind::DedupeLines,
        name: "dedupe",
        label: "Remove Duplicate Lines",
        apply: cleanup::dedupe_lines,
    },
    CleanupDef {
        kind: CleanupKind::NumberLines,
        name: "number-lines",
        label: "Number Lines",
        apply: cleanup::number_lines,
    },
];

impl CleanupKind {
    /// All kinds in registry order
    pub fn all() -> impl Iterator<Item = CleanupKind> {
        CLEANUPS.iter().map(|def| def.kind)
    }

    /// Position in [`CLEANUPS`]
    const fn index(self) -> usize {
        match self {
            CleanupKind::CollapseWhitespace => 0,
            CleanupKind::RemoveEmptyLines => 1,
            CleanupKind::RemoveLineBreaks => 2,
            CleanupKind::SortLines => 3,
            CleanupKind::DedupeLines => 4,
            CleanupKind::NumberLines => 5,
        }
    }

    fn def(self) -> &'static CleanupDef {
        &CLEANUPS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }

    pub fn apply(self, input: &str) -> String {
        (self.def().apply)(input)
    }
}

impl fmt::Display for CleanupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CleanupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CLEANUPS
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(s))
            .map(|def| def.kind)
            .ok_or_else(|| format!("unknown cleanup: {}", s))
    }
}
