//! Option payloads shared by both presets.

use serde_json::{json, Value};

/// Path globs treated as dev-only code by `import/no-extraneous-dependencies`.
///
/// The upstream airbnb list of test/config file patterns, extended with
/// Storybook story files. Paths are treated both as absolute and relative
/// to the working directory.
pub(crate) fn dev_dependency_globs() -> Value {
    json!([
        "test/**",
        "tests/**",
        "spec/**",
        "**/__tests__/**",
        "**/__mocks__/**",
        "test.{js,jsx}",
        "test-*.{js,jsx}",
        "**/*{.,_}{test,spec}.{js,jsx}",
        "**/jest.config.js",
        "**/jest.setup.js",
        "**/vue.config.js",
        "**/webpack.config.js",
        "**/webpack.config.*.js",
        "**/rollup.config.js",
        "**/rollup.config.*.js",
        "**/gulpfile.js",
        "**/gulpfile.*.js",
        "**/Gruntfile{,.js}",
        "**/protractor.conf.js",
        "**/protractor.conf.*.js",
        "**/*.story.{ts,tsx}",
        "**/*.stories.{ts,tsx}",
    ])
}

/// Options for `@typescript-eslint/no-unused-vars`, copied from the airbnb
/// configuration of the base `no-unused-vars` rule it shadows.
pub(crate) fn no_unused_vars_options() -> Value {
    json!({
        "vars": "all",
        "args": "after-used",
        "ignoreRestSiblings": true,
    })
}

/// The default-identifier selector for `@typescript-eslint/naming-convention`:
/// camelCase for regular code, UPPER_CASE for query-style constants,
/// PascalCase for components, leading underscore allowed.
pub(crate) fn naming_default_selector() -> Value {
    json!({
        "selector": "default",
        "format": ["camelCase", "UPPER_CASE", "PascalCase"],
        "leadingUnderscore": "allow",
    })
}

/// Type-like identifiers are always strict PascalCase.
pub(crate) fn naming_type_like_selector() -> Value {
    json!({
        "selector": "typeLike",
        "format": ["PascalCase"],
    })
}
