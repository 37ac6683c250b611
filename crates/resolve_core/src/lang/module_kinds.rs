//! Define the module-kind vocabulary: what kinds of compilation units exist, which file extension each is stored
//! under, and which kinds may be the target of an implicit import.
//!
//! ## Notes
//! - Concept and enhancement realizations share the `rb` extension; [`from_extension`] therefore reports every kind
//!   stored under an extension rather than a single one.
//! - Only specification and realization kinds are legal implicit-import targets: a facility declaration may name a
//!   concept, a realization or an enhancement, never a precis or another facility module.
//!
//! ## Examples
//! ```rust
//! use resolve_core::lang::module_kinds::{self, ModuleKind};
//!
//! assert_eq!(module_kinds::extension(ModuleKind::Concept), "co");
//! assert!(module_kinds::appropriate_for_import(ModuleKind::Concept));
//! assert!(!module_kinds::appropriate_for_import(ModuleKind::Facility));
//! ```

/// Stable identifier for every module kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Precis,
    Concept,
    Enhancement,
    ConceptRealization,
    EnhancementRealization,
    Facility,
}

/// Metadata for a module kind.
#[derive(Debug, Clone, Copy)]
pub struct ModuleKindInfo {
    pub id: ModuleKind,
    /// Keyword that opens the module in source (`Concept Stack_Template; ... end Stack_Template;`).
    pub keyword: &'static str,
    pub extension: &'static str,
    pub implicitly_importable: bool,
}

/// Registry of all module kinds.
pub const MODULE_KINDS: &[ModuleKindInfo] = &[
    ModuleKindInfo {
        id: ModuleKind::Precis,
        keyword: "Precis",
        extension: "mt",
        implicitly_importable: false,
    },
    ModuleKindInfo {
        id: ModuleKind::Concept,
        keyword: "Concept",
        extension: "co",
        implicitly_importable: true,
    },
    ModuleKindInfo {
        id: ModuleKind::Enhancement,
        keyword: "Enhancement",
        extension: "en",
        implicitly_importable: true,
    },
    ModuleKindInfo {
        id: ModuleKind::ConceptRealization,
        keyword: "Realization",
        extension: "rb",
        implicitly_importable: true,
    },
    ModuleKindInfo {
        id: ModuleKind::EnhancementRealization,
        keyword: "Realization",
        extension: "rb",
        implicitly_importable: true,
    },
    ModuleKindInfo {
        id: ModuleKind::Facility,
        keyword: "Facility",
        extension: "fa",
        implicitly_importable: false,
    },
];

/// Default extensions of non-native (externally realized) artifacts.
pub const NON_NATIVE_EXTENSIONS: &[&str] = &["java", "c", "h"];

/// Metadata lookup.
pub fn info_for(id: ModuleKind) -> &'static ModuleKindInfo {
    MODULE_KINDS.iter().find(|m| m.id == id).expect("INVARIANT: every ModuleKind has a registry entry")
}

/// Source-file extension (without the dot).
pub fn extension(id: ModuleKind) -> &'static str {
    info_for(id).extension
}

/// Whether a module of this kind may be named by an implicit import.
pub fn appropriate_for_import(id: ModuleKind) -> bool {
    info_for(id).implicitly_importable
}

/// All kinds stored under `ext` (empty if the extension is not a RESOLVE extension).
pub fn from_extension(ext: &str) -> Vec<ModuleKind> {
    MODULE_KINDS.iter().filter(|m| m.extension == ext).map(|m| m.id).collect()
}

/// Every distinct RESOLVE source extension, in registry order.
pub fn all_extensions() -> Vec<&'static str> {
    let mut exts: Vec<&'static str> = Vec::new();
    for m in MODULE_KINDS {
        if !exts.contains(&m.extension) {
            exts.push(m.extension);
        }
    }
    exts
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ModuleKind::Precis => "precis",
            ModuleKind::Concept => "concept",
            ModuleKind::Enhancement => "enhancement",
            ModuleKind::ConceptRealization => "concept realization",
            ModuleKind::EnhancementRealization => "enhancement realization",
            ModuleKind::Facility => "facility",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realizations_share_extension() {
        assert_eq!(
            from_extension("rb"),
            vec![ModuleKind::ConceptRealization, ModuleKind::EnhancementRealization]
        );
    }

    #[test]
    fn test_unknown_extension_is_empty() {
        assert!(from_extension("java").is_empty());
    }

    #[test]
    fn test_all_extensions_deduplicated() {
        assert_eq!(all_extensions(), vec!["mt", "co", "en", "rb", "fa"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ModuleKind::ConceptRealization.to_string(), "concept realization");
    }
}
