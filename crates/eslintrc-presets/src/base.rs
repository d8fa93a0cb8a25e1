//! The base preset: server-side / general TypeScript code.

use crate::shared;
use eslintrc_core::{ConfigDocument, RuleEntry};
use serde_json::json;

/// Builds the base configuration document.
///
/// Conventions: airbnb-base plus the typescript plugin's recommended set,
/// with prettier disabling the formatting rules. The explicit rules below
/// resolve conflicts between the two rule sets and encode house policy.
#[must_use]
#[allow(clippy::too_many_lines)] // one declaration per upstream rule
pub fn base() -> ConfigDocument {
    ConfigDocument::builder()
        .root(true)
        .parser("@typescript-eslint/parser")
        .plugin("@typescript-eslint")
        .plugin("import")
        .extend("airbnb-base")
        .extend("plugin:@typescript-eslint/recommended")
        .extend("prettier")
        .extend("prettier/@typescript-eslint")
        // Resolve import specifiers against the TypeScript project.
        .setting("import/resolver", json!({ "typescript": {} }))
        //
        // airbnb and typescript/recommended sometimes configure the same
        // base rule differently. Where the typescript plugin disables a
        // base rule in favour of its own namespaced version, the airbnb
        // options have to be carried over to the namespaced rule here.
        //
        // Carried over from the airbnb configuration of no-unused-vars:
        .rule(
            "@typescript-eslint/no-unused-vars",
            RuleEntry::error().with_options(vec![shared::no_unused_vars_options()]),
        )
        // A lone if inside an else block is fine.
        .rule("no-lonely-if", RuleEntry::off())
        // An else after a return is fine.
        .rule("no-else-return", RuleEntry::off())
        // A module with a single export does not need a default export.
        // See https://github.com/airbnb/javascript/issues/1135
        .rule("import/prefer-default-export", RuleEntry::off())
        // Leading underscores occur legitimately (`__typename` in GraphQL)
        // and mark private-ish methods without enforcement machinery.
        .rule("no-underscore-dangle", RuleEntry::off())
        // First declaration: dev imports allowed only in test/config globs.
        // Deliberately re-declared below; the second declaration wins, as
        // with a duplicated key in a JS object literal.
        .rule(
            "import/no-extraneous-dependencies",
            RuleEntry::error().with_options(vec![json!({
                "devDependencies": shared::dev_dependency_globs(),
                "optionalDependencies": false,
            })]),
        )
        // Return types are inferred well enough.
        .rule(
            "@typescript-eslint/explicit-function-return-type",
            RuleEntry::off(),
        )
        // Where both `type` and `interface` would work, use `type`: union
        // types need `type` anyway, so keep every shape declaration uniform.
        .rule(
            "@typescript-eslint/consistent-type-definitions",
            RuleEntry::error().with_options(vec![json!("type")]),
        )
        // Off because naming-convention below covers it.
        .rule("camelcase", RuleEntry::off())
        .rule(
            "@typescript-eslint/naming-convention",
            RuleEntry::error().with_options(vec![
                shared::naming_default_selector(),
                shared::naming_type_like_selector(),
            ]),
        )
        // No `@ts-ignore` and friends; the upstream config uses the numeric
        // severity form (2) here.
        .rule("@typescript-eslint/ban-ts-comment", RuleEntry::error())
        // Second declaration: every dependency is a dev dependency, because
        // every production artifact is built into its own bundle. This one
        // is authoritative.
        .rule(
            "import/no-extraneous-dependencies",
            RuleEntry::error().with_options(vec![json!({
                "devDependencies": true,
                "optionalDependencies": false,
                "peerDependencies": false,
                "bundledDependencies": false,
            })]),
        )
        // Rules below are exclusive to this preset.
        //
        // No extensions on js/ts import specifiers, extensions everywhere else.
        .rule(
            "import/extensions",
            RuleEntry::error().with_options(vec![
                json!("always"),
                json!({ "js": "never", "ts": "never" }),
            ]),
        )
        .build()
}
