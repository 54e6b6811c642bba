// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Nimbus views.
//!
//! This module contains pure view-layer values with no I/O. Template
//! loading, compilation, and database access are handled via ports (traits)
//! defined in the application layer.
//!
//! - **No I/O**: No filesystem, network, or clock access beyond what the
//!   caller passes in
//! - **Immutable snapshots**: `Globals` and merged `RenderData` are copies
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    globals::{
        APP_NAME_KEY, BASE_URL_KEY, DEFAULT_APP_NAME, DEFAULT_BASE_URL, Globals, ViewConfig,
        YEAR_KEY,
    },
    render_data::RenderData,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    NameNormalization, PARTIALS_DIR, Record, TEMPLATE_EXTENSION, TemplateRef,
};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    // ========================================================================
    // TemplateRef Tests
    // ========================================================================

    #[test]
    fn template_ref_accepts_plain_and_nested_names() {
        assert_eq!(TemplateRef::new("about").unwrap().as_str(), "about");
        assert_eq!(
            TemplateRef::new("admin/index").unwrap().as_str(),
            "admin/index"
        );
    }

    #[test]
    fn template_ref_rejects_bad_shapes() {
        for bad in ["", "   ", "/etc/passwd", "\\share", "C:views", "../secret", "a/../b", "dir/"] {
            assert!(
                matches!(
                    TemplateRef::new(bad),
                    Err(DomainError::InvalidTemplateName { .. })
                ),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn template_ref_rejects_control_characters() {
        assert!(TemplateRef::new("ab\0out").is_err());
    }

    #[test]
    fn verbatim_keeps_extension() {
        let t = TemplateRef::new("about.mustache").unwrap();
        assert_eq!(t.normalized(NameNormalization::Verbatim), "about.mustache");
        assert_eq!(
            t.relative_path(NameNormalization::Verbatim),
            PathBuf::from("about.mustache.mustache")
        );
    }

    #[test]
    fn strip_extension_removes_one_suffix() {
        let t = TemplateRef::new("about.mustache").unwrap();
        assert_eq!(t.normalized(NameNormalization::StripExtension), "about");
        assert_eq!(
            t.relative_path(NameNormalization::StripExtension),
            PathBuf::from("about.mustache")
        );

        let plain = TemplateRef::new("about").unwrap();
        assert_eq!(plain.normalized(NameNormalization::StripExtension), "about");
    }

    #[test]
    fn strip_extension_leaves_lookalikes_alone() {
        // no dot before the suffix
        let t = TemplateRef::new("nomustache").unwrap();
        assert_eq!(t.normalized(NameNormalization::StripExtension), "nomustache");

        // nothing left after stripping
        let t = TemplateRef::new(".mustache").unwrap();
        assert_eq!(t.normalized(NameNormalization::StripExtension), ".mustache");
    }

    #[test]
    fn nested_relative_path_uses_subdirectories() {
        let t = TemplateRef::new("admin/users/index").unwrap();
        assert_eq!(
            t.relative_path(NameNormalization::Verbatim),
            PathBuf::from("admin").join("users").join("index.mustache")
        );
    }

    #[test]
    fn template_ref_serde_validates() {
        let ok: TemplateRef = serde_json::from_value(json!("home")).unwrap();
        assert_eq!(ok.as_str(), "home");
        assert!(serde_json::from_value::<TemplateRef>(json!("../home")).is_err());
    }

    #[test]
    fn normalization_parses() {
        assert_eq!(
            NameNormalization::from_str("verbatim").unwrap(),
            NameNormalization::Verbatim
        );
        assert_eq!(
            NameNormalization::from_str("Strip-Extension").unwrap(),
            NameNormalization::StripExtension
        );
        assert!(matches!(
            NameNormalization::from_str("lowercase"),
            Err(DomainError::UnknownNormalization(_))
        ));
    }

    // ========================================================================
    // RenderData Tests
    // ========================================================================

    #[test]
    fn render_data_from_json_requires_object() {
        let data = RenderData::from_json(r#"{"title": "Hi", "n": 3}"#).unwrap();
        assert_eq!(data.get("title"), Some(&json!("Hi")));
        assert_eq!(data.len(), 2);

        assert!(matches!(
            RenderData::from_json("[1, 2]"),
            Err(DomainError::InvalidRenderData(_))
        ));
        assert!(matches!(
            RenderData::from_json("{not json"),
            Err(DomainError::InvalidRenderData(_))
        ));
    }

    #[test]
    fn merged_with_prefers_overrides_and_copies() {
        let base = RenderData::new().with("a", 1).with("b", 2);
        let overrides = RenderData::new().with("b", 20).with("c", 30);

        let merged = base.merged_with(&overrides);

        assert_eq!(merged.get("a"), Some(&json!(1)));
        assert_eq!(merged.get("b"), Some(&json!(20)));
        assert_eq!(merged.get("c"), Some(&json!(30)));
        // inputs untouched
        assert_eq!(base.get("b"), Some(&json!(2)));
        assert!(!base.contains_key("c"));
        assert_eq!(overrides.len(), 2);
    }

    // ========================================================================
    // Globals Tests
    // ========================================================================

    #[test]
    fn globals_seed_defaults() {
        let g = Globals::seeded(&ViewConfig::default(), 2026);
        assert_eq!(g.get(APP_NAME_KEY), Some(&json!("Nimbus")));
        assert_eq!(g.get(BASE_URL_KEY), Some(&json!("/")));
        assert_eq!(g.get(YEAR_KEY), Some(&json!(2026)));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn globals_seed_from_config() {
        let cfg = ViewConfig::new().app_name("Demo").base_url("/demo/");
        let g = Globals::seeded(&cfg, 2026);
        assert_eq!(g.get(APP_NAME_KEY), Some(&json!("Demo")));
        assert_eq!(g.get(BASE_URL_KEY), Some(&json!("/demo/")));
    }

    #[test]
    fn globals_with_global_is_a_copy() {
        let g = Globals::seeded(&ViewConfig::default(), 2026);
        let g2 = g.with_global("theme", "dark").with_global(APP_NAME_KEY, "Other");

        assert!(g.get("theme").is_none());
        assert_eq!(g.get(APP_NAME_KEY), Some(&json!("Nimbus")));
        assert_eq!(g2.get("theme"), Some(&json!("dark")));
        assert_eq!(g2.get(APP_NAME_KEY), Some(&json!("Other")));
    }

    #[test]
    fn globals_merge_lets_data_win() {
        let g = Globals::seeded(&ViewConfig::default(), 2026);
        let data = RenderData::new().with(APP_NAME_KEY, "Page").with("title", "About");

        let merged = g.merge(&data);

        assert_eq!(merged.get(APP_NAME_KEY), Some(&json!("Page")));
        assert_eq!(merged.get("title"), Some(&json!("About")));
        assert_eq!(merged.get(YEAR_KEY), Some(&json!(2026)));
        assert_eq!(g.get(APP_NAME_KEY), Some(&json!("Nimbus")));
    }

    #[test]
    fn view_config_deserializes_partial_mapping() {
        let cfg: ViewConfig = serde_json::from_value(json!({"app_name": "Demo"})).unwrap();
        assert_eq!(cfg.app_name.as_deref(), Some("Demo"));
        assert!(cfg.base_url.is_none());
    }
}
