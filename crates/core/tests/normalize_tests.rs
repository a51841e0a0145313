use unmap_core::{normalize, synthesized_name};

#[test]
fn strips_webpack_scheme_and_namespace() {
    assert_eq!(
        normalize("webpack://my-app/./src/index.js").as_deref(),
        Some("src/index.js")
    );
    assert_eq!(
        normalize("webpack:///./foo/bar.js").as_deref(),
        Some("foo/bar.js")
    );
    assert_eq!(
        normalize("webpack-internal:///./lib/util.js").as_deref(),
        Some("lib/util.js")
    );
}

#[test]
fn strips_generic_schemes_and_query_strings() {
    assert_eq!(
        normalize("https://cdn.example.com/js/app.js?v=1234").as_deref(),
        Some("js/app.js")
    );
    assert_eq!(
        normalize("file:///home/dev/project/main.js").as_deref(),
        Some("home/dev/project/main.js")
    );
    assert_eq!(normalize("src/app.js#section").as_deref(), Some("src/app.js"));
}

#[test]
fn absolute_and_drive_paths_become_relative() {
    assert_eq!(
        normalize("/var/www/site/app.js").as_deref(),
        Some("var/www/site/app.js")
    );
    assert_eq!(
        normalize("C:\\projects\\site\\app.js").as_deref(),
        Some("projects/site/app.js")
    );
}

#[test]
fn traversal_flattens_instead_of_escaping() {
    let normalized = normalize("../../etc/passwd").unwrap();
    assert_eq!(normalized, "etc_passwd");
    assert!(!normalized.contains(".."));
    assert!(!normalized.starts_with('/'));
}

#[test]
fn interior_parent_segments_resolve_in_place() {
    assert_eq!(
        normalize("src/components/../widgets/button.js").as_deref(),
        Some("src/widgets/button.js")
    );
}

#[test]
fn dot_segments_and_duplicate_separators_collapse() {
    assert_eq!(
        normalize("./src//./widgets///button.js").as_deref(),
        Some("src/widgets/button.js")
    );
}

#[test]
fn case_and_extension_are_preserved() {
    assert_eq!(
        normalize("Src/Widget.MIN.JS").as_deref(),
        Some("Src/Widget.MIN.JS")
    );
}

#[test]
fn empty_identifiers_yield_nothing() {
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("."), None);
    assert_eq!(normalize("./"), None);
    assert_eq!(normalize("webpack://"), None);
}

#[test]
fn synthesized_names_carry_the_index() {
    assert_eq!(synthesized_name(0, "js"), "unnamed-0.js");
    assert_eq!(synthesized_name(4, "css"), "unnamed-4.css");
}
