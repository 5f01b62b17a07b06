//! Rendering of the subcommand source file.
//!
//! The boilerplate lives in `subcommand.go.tmpl` next to this module and is
//! included at compile time. It is a minijinja template over the serialized
//! `ParameterSet`:
//!
//! - `{{ package }}`, `{{ synopsis }}`, `{{ usage }}`, `{{ username }}` verbatim
//! - `{{ command }}` verbatim, `{{ command | lower }}` for the `Name()` result
//! - `{{ command | first | lower }}` for the method receiver
//!
//! Undefined variables are errors, and the trailing newline is preserved so
//! the output matches the golden files byte for byte.


use crate::error::Result;
use crate::params::ParameterSet;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Name the subcommand template is registered under.
pub const TEMPLATE_NAME: &str = "subcommand.go";

/// Source of the subcommand template.
pub const SUBCOMMAND_TEMPLATE: &str = include_str!("subcommand.go.tmpl");

/// A minijinja environment with the subcommand template registered.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Create a renderer for the built-in subcommand template.
    pub fn new() -> Result<Self> {
        Self::with_template(TEMPLATE_NAME, SUBCOMMAND_TEMPLATE)
    }

    /// Create a renderer for an arbitrary template source.
    ///
    /// The template is compiled immediately; syntax errors are returned here.
    pub fn with_template(name: &str, source: &str) -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("first", first);
        env.add_template_owned(name.to_string(), source.to_string())?;
        Ok(Self { env })
    }

    /// Render the registered template named `name` with `params`.
    pub fn render_named(&self, name: &str, params: &ParameterSet) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(params)?)
    }

    /// Render the subcommand source for `params`.
    pub fn render(&self, params: &ParameterSet) -> Result<String> {
        self.render_named(TEMPLATE_NAME, params)
    }
}

/// Render the subcommand source with a fresh renderer.
pub fn render(params: &ParameterSet) -> Result<String> {
    Renderer::new()?.render(params)
}

/// First character of `value`, or an empty string.
fn first(value: &str) -> String {
    value.chars().next().map(String::from).unwrap_or_default()
}
