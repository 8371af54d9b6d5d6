use crate::loc;
use crate::types::tests::test_utils::parse_type_ref;
use crate::types::TypeDescriptor;
use crate::types::TypeResolver;
use crate::CodegenError;
use crate::SchemaDocument;
use crate::UnsupportedConstruct;
use proptest::prelude::*;

type Result<T> = std::result::Result<T, CodegenError>;

const LOCATION: loc::SourcePosition = loc::SourcePosition { col: 1, line: 1 };

fn test_resolver() -> TypeResolver {
    TypeResolver::new(["Color"], ["DateTime"])
}

fn resolve(type_ref: &str) -> Result<TypeDescriptor> {
    test_resolver().resolve(&parse_type_ref(type_ref), LOCATION)
}

#[test]
fn builtin_scalars_are_always_known() -> Result<()> {
    for name in ["Boolean", "Float", "ID", "Int", "String"] {
        assert_eq!(resolve(name)?, TypeDescriptor::Scalar {
            name: name.to_string(),
            nullable: true,
        });
    }
    Ok(())
}

#[test]
fn named_references_resolve_by_category() -> Result<()> {
    assert_eq!(resolve("Color!")?, TypeDescriptor::Enum {
        name: "Color".to_string(),
        nullable: false,
    });
    assert_eq!(resolve("DateTime")?, TypeDescriptor::Scalar {
        name: "DateTime".to_string(),
        nullable: true,
    });
    // Anything that isn't a known enum or scalar is an object reference.
    assert_eq!(resolve("User")?, TypeDescriptor::Object {
        name: "User".to_string(),
        nullable: true,
    });
    Ok(())
}

#[test]
fn nullability_is_tracked_per_level() -> Result<()> {
    let nullable_list_of_non_null = resolve("[String!]")?;
    let non_null_list_of_nullable = resolve("[String]!")?;

    assert_eq!(nullable_list_of_non_null, TypeDescriptor::List {
        element: Box::new(TypeDescriptor::Scalar {
            name: "String".to_string(),
            nullable: false,
        }),
        nullable: true,
    });
    assert_eq!(non_null_list_of_nullable, TypeDescriptor::List {
        element: Box::new(TypeDescriptor::Scalar {
            name: "String".to_string(),
            nullable: true,
        }),
        nullable: false,
    });
    assert_ne!(nullable_list_of_non_null, non_null_list_of_nullable);
    Ok(())
}

#[test]
fn deeply_nested_object_lists_require_a_selector() -> Result<()> {
    let descriptor = resolve("[[[User!]]!]")?;

    assert!(descriptor.requires_selector());
    assert_eq!(descriptor.innermost_name(), "User");
    assert_eq!(descriptor.innermost(), &TypeDescriptor::Object {
        name: "User".to_string(),
        nullable: false,
    });
    assert_eq!(descriptor.to_string(), "[[[User!]]!]");
    Ok(())
}

#[test]
fn leaf_lists_do_not_require_a_selector() -> Result<()> {
    assert!(!resolve("[[Color!]]")?.requires_selector());
    assert!(!resolve("[Int]!")?.requires_selector());
    Ok(())
}

#[test]
fn references_to_interfaces_and_unions_are_rejected() -> Result<()> {
    let doc = SchemaDocument::parse(concat!(
        "schema { query: Query }\n",
        "type Query { x: Int }\n",
        "interface Node { id: ID! }\n",
        "union Thing = Query\n",
    ))?;
    let resolver = TypeResolver::from_document(&doc);

    let err = resolver.resolve(&parse_type_ref("[Node!]"), LOCATION).unwrap_err();
    assert_eq!(err, CodegenError::UnsupportedTypeConstruct {
        construct: UnsupportedConstruct::Interface,
        location: LOCATION,
        type_name: "Node".to_string(),
    });

    let err = resolver.resolve(&parse_type_ref("Thing"), LOCATION).unwrap_err();
    assert_eq!(err, CodegenError::UnsupportedTypeConstruct {
        construct: UnsupportedConstruct::Union,
        location: LOCATION,
        type_name: "Thing".to_string(),
    });
    Ok(())
}

#[test]
fn from_document_knows_declared_enums_and_scalars() -> Result<()> {
    let doc = SchemaDocument::parse(concat!(
        "schema { query: Query }\n",
        "type Query { x: Int }\n",
        "enum Status { ACTIVE }\n",
        "scalar Url\n",
    ))?;
    let resolver = TypeResolver::from_document(&doc);

    assert!(resolver.is_enum("Status"));
    assert!(resolver.is_scalar("Url"));
    assert!(resolver.is_scalar("Int"));
    assert!(!resolver.is_enum("Query"));
    assert!(!resolver.is_scalar("Query"));
    Ok(())
}

fn type_ref_strategy() -> impl Strategy<Value = (String, String, usize)> {
    (
        prop::sample::select(vec!["Int", "String", "Color", "DateTime", "User"]),
        any::<bool>(),
        prop::collection::vec(any::<bool>(), 0..5),
    ).prop_map(|(base, base_non_null, list_levels)| {
        let mut type_ref = base.to_string();
        if base_non_null {
            type_ref.push('!');
        }
        for non_null in &list_levels {
            type_ref = format!("[{type_ref}]");
            if *non_null {
                type_ref.push('!');
            }
        }
        (type_ref, base.to_string(), list_levels.len())
    })
}

fn list_depth(descriptor: &TypeDescriptor) -> usize {
    match descriptor {
        TypeDescriptor::List { element, .. } => 1 + list_depth(element),
        _ => 0,
    }
}

proptest! {
    #[test]
    fn resolution_preserves_every_wrapper(
        (type_ref, base, depth) in type_ref_strategy(),
    ) {
        let descriptor = resolve(&type_ref).expect("resolution failed");

        prop_assert_eq!(descriptor.to_string(), type_ref);
        prop_assert_eq!(list_depth(&descriptor), depth);
        prop_assert_eq!(descriptor.innermost_name(), base.as_str());
        prop_assert_eq!(descriptor.requires_selector(), base == "User");
    }

    #[test]
    fn resolution_is_stable(
        (type_ref, _base, _depth) in type_ref_strategy(),
    ) {
        let first = resolve(&type_ref).expect("resolution failed");
        let second = resolve(&type_ref).expect("resolution failed");
        prop_assert_eq!(first, second);
    }
}
