use proptest::prelude::*;
use sql2struct_core::naming::{strip_prefix, struct_name, to_struct_name};
use sql2struct_core::types::CustomTag;

proptest! {
    #[test]
    fn struct_name_has_no_underscores(s in "[a-z][a-z0-9_]{0,30}") {
        prop_assert!(!to_struct_name(&s).contains('_'));
    }

    #[test]
    fn struct_name_starts_uppercase(s in "[a-z][a-z0-9_]{0,30}") {
        let name = to_struct_name(&s);
        let first = name.chars().next().unwrap();
        prop_assert!(first.is_ascii_uppercase());
    }

    #[test]
    fn struct_name_is_idempotent(s in "[a-z][a-z0-9_]{0,30}") {
        let once = to_struct_name(&s);
        prop_assert_eq!(to_struct_name(&once), once.clone());
    }

    #[test]
    fn absent_prefix_is_noop(s in "[a-z][a-z0-9_]{0,30}") {
        prop_assume!(!s.starts_with("zz_"));
        prop_assert_eq!(strip_prefix("zz_", &s), s.as_str());
    }

    #[test]
    fn stripped_name_is_never_empty(prefix in "[a-z]{1,3}_", rest in "[a-z0-9_]{0,10}") {
        let ident = format!("{prefix}{rest}");
        prop_assert!(!strip_prefix(&prefix, &ident).is_empty());
    }

    #[test]
    fn struct_name_nonempty_for_nonempty_identifiers(s in "[a-z0-9_]{1,30}") {
        prop_assert!(!struct_name("f_", &s).is_empty());
    }

    #[test]
    fn custom_tag_display_roundtrip(key in "[a-z][a-z0-9_]{0,10}", dash in any::<bool>()) {
        let entry = if dash { format!("-{key}") } else { key.clone() };
        let tag = CustomTag::new(entry.clone()).unwrap();
        prop_assert_eq!(tag.key(), key.as_str());
        prop_assert_eq!(tag.to_string(), entry);
    }
}
