//! Integration tests for dialect lookup.

use jsonschema_dialects::{
    specification_with, Dialect, Specification, UnknownDialect, DRAFT202012, DRAFT4,
};

// === Catalog Tests ===

mod catalog {
    use super::*;

    #[test]
    fn every_known_uri_resolves() {
        let expected = [
            ("https://json-schema.org/draft/2020-12/schema", "draft2020-12"),
            ("https://json-schema.org/draft/2019-09/schema", "draft2019-09"),
            ("http://json-schema.org/draft-07/schema#", "draft-07"),
            ("http://json-schema.org/draft-06/schema#", "draft-06"),
            ("http://json-schema.org/draft-04/schema#", "draft-04"),
            ("http://json-schema.org/draft-03/schema#", "draft-03"),
        ];

        for (uri, name) in expected {
            let spec = specification_with(uri, None).unwrap();
            assert_eq!(spec.name(), name, "wrong specification for {}", uri);
        }
    }

    #[test]
    fn dialect_enum_matches_lookup() {
        for dialect in Dialect::ALL {
            let spec = specification_with(dialect.uri(), None).unwrap();
            assert!(std::ptr::eq(spec, dialect.specification()));
        }
    }

    #[test]
    fn catalog_has_six_distinct_entries() {
        let mut names: Vec<_> = Dialect::ALL
            .iter()
            .map(|d| d.specification().name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}

// === Unknown Dialect Tests ===

mod unknown_dialect {
    use super::*;

    #[test]
    fn fails_without_default() {
        let result = specification_with("unknown-uri", None);
        assert_eq!(result, Err(UnknownDialect::new("unknown-uri")));
    }

    #[test]
    fn returns_default() {
        let spec = specification_with("unknown-uri", Some(&DRAFT4)).unwrap();
        assert!(std::ptr::eq(spec, &DRAFT4));
    }

    #[test]
    fn error_carries_uri() {
        let err = specification_with("urn:example:custom", None).unwrap_err();
        assert_eq!(err.uri, "urn:example:custom");
        assert!(err.to_string().contains("urn:example:custom"));
    }

    #[test]
    fn no_normalization() {
        let near_misses = [
            "http://json-schema.org/draft-07/schema",
            "https://json-schema.org/draft-07/schema#",
            "http://json-schema.org/draft-04/schema",
            "https://json-schema.org/draft/2020-12/schema#",
            "https://json-schema.org/draft/2019-09/schema/",
            "http://json-schema.org/draft/2020-12/schema",
            "",
        ];
        for uri in near_misses {
            assert!(
                specification_with(uri, None).is_err(),
                "{:?} should not match",
                uri
            );
        }
    }

    #[test]
    fn custom_default_specification() {
        use jsonschema_dialects::{subresources_of, AnchorsIn, IdOf};

        static CUSTOM: Specification = Specification::new(
            "vendor-dialect",
            IdOf::DollarId,
            subresources_of(&[], &["allOf"], &[]),
            AnchorsIn::Disabled,
        );

        let spec = specification_with("https://example.com/vendor/schema", Some(&CUSTOM)).unwrap();
        assert_eq!(spec.name(), "vendor-dialect");

        let known = specification_with(Dialect::Draft202012.uri(), Some(&CUSTOM)).unwrap();
        assert!(std::ptr::eq(known, &DRAFT202012));
    }
}

// === Configuration Tests ===

mod configuration {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Config {
        #[serde(default)]
        dialect: Dialect,
    }

    #[test]
    fn dialect_from_config() {
        let config: Config =
            serde_json::from_str(r#"{"dialect": "http://json-schema.org/draft-04/schema#"}"#)
                .unwrap();
        assert_eq!(config.dialect, Dialect::Draft4);
        assert_eq!(config.dialect.specification().name(), "draft-04");
    }

    #[test]
    fn dialect_defaults_to_2020_12() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.dialect, Dialect::Draft202012);
    }

    #[test]
    fn unknown_dialect_in_config_rejected() {
        let result: Result<Config, _> =
            serde_json::from_str(r#"{"dialect": "http://json-schema.org/schema#"}"#);
        assert!(result.is_err());
    }
}
