//! The react preset: TypeScript + React client code.

use crate::shared;
use eslintrc_core::{ConfigDocument, RuleEntry};
use serde_json::json;

/// Builds the react configuration document.
///
/// Same conventions as [`base`](crate::base), layered with the full airbnb
/// rule set (not just airbnb-base), the react-hooks recommended rules, and
/// component authoring policy.
#[must_use]
#[allow(clippy::too_many_lines)] // one declaration per upstream rule
pub fn react() -> ConfigDocument {
    ConfigDocument::builder()
        .root(true)
        .parser("@typescript-eslint/parser")
        .plugin("@typescript-eslint")
        .plugin("import")
        .extend("airbnb")
        .extend("plugin:@typescript-eslint/recommended")
        .extend("plugin:react-hooks/recommended")
        .extend("prettier")
        // Resolve import specifiers against the TypeScript project.
        .setting("import/resolver", json!({ "typescript": {} }))
        //
        // Conflict resolution between airbnb and typescript/recommended,
        // kept in sync with the base preset.
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
        // Where both `type` and `interface` would work, use `type`.
        .rule(
            "@typescript-eslint/consistent-type-definitions",
            RuleEntry::error().with_options(vec![json!("type")]),
        )
        // Off because naming-convention below covers it.
        .rule("camelcase", RuleEntry::off())
        // Unlike the base preset, object literal keys are exempt from case
        // checking (API payloads and style maps use arbitrary keys).
        .rule(
            "@typescript-eslint/naming-convention",
            RuleEntry::error().with_options(vec![
                shared::naming_default_selector(),
                shared::naming_type_like_selector(),
                json!({ "selector": "objectLiteralProperty", "format": null }),
            ]),
        )
        // No `@ts-ignore` and friends.
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
        // Every condition must be an explicit boolean; no truthiness
        // coercion from strings, numbers, nullables, or `any`.
        .rule(
            "@typescript-eslint/strict-boolean-expressions",
            RuleEntry::error().with_options(vec![json!({
                "allowString": false,
                "allowNumber": false,
                "allowNullableObject": false,
                "allowNullableBoolean": false,
                "allowNullableString": false,
                "allowNullableNumber": false,
                "allowAny": false,
                "allowRuleToRunWithoutStrictNullChecksIKnowWhatIAmDoing": false,
            })]),
        )
        // Default exports hurt readability, review, and tree shaking.
        .rule("import/no-default-export", RuleEntry::error())
        // Rules below are exclusive to this preset.
        //
        // Bodied arrow functions generate nicer diffs, even if longer.
        .rule(
            "arrow-body-style",
            RuleEntry::error().with_options(vec![
                json!("as-needed"),
                json!({ "requireReturnForObjectLiteral": true }),
            ]),
        )
        // No extensions on js/ts/tsx import specifiers, extensions
        // everywhere else.
        .rule(
            "import/extensions",
            RuleEntry::error().with_options(vec![
                json!("always"),
                json!({ "js": "never", "ts": "never", "tsx": "never" }),
            ]),
        )
        // airbnb requires a label to both have htmlFor AND nest the input;
        // either one is enough here. The empty options object is required
        // to drop airbnb's customization — a bare "error" would keep it.
        .rule(
            "jsx-a11y/label-has-associated-control",
            RuleEntry::error().with_options(vec![json!({})]),
        )
        // Prop access style is the author's choice.
        .rule("react/destructuring-assignment", RuleEntry::off())
        // propTypes are discontinued upstream; types cover this.
        .rule("react/prop-types", RuleEntry::off())
        // airbnb allows JSX in .jsx; with TypeScript it lives in .tsx only.
        .rule(
            "react/jsx-filename-extension",
            RuleEntry::error().with_options(vec![json!({ "extensions": [".tsx"] })]),
        )
        .rule("react/jsx-props-no-spreading", RuleEntry::off())
        // Named components may use any function form; anonymous components
        // must be function expressions.
        .rule(
            "react/function-component-definition",
            RuleEntry::error().with_options(vec![json!({
                "namedComponents": [
                    "function-declaration",
                    "function-expression",
                    "arrow-function",
                ],
                "unnamedComponents": "function-expression",
            })]),
        )
        .build()
}
