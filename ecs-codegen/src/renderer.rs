//! Template environment.

use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

/// Renders named templates with serializable contexts.
///
/// Output is never escaped, a trailing newline in a template is kept, and
/// referencing an undefined variable is an error rather than an empty string.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Load templates lazily from a directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = environment();
        env.set_loader(minijinja::path_loader(dir.as_ref()));
        Self { env }
    }

    /// Build a renderer holding a single in-memory template.
    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, minijinja::Error> {
        let mut env = environment();
        env.add_template_owned(name.into(), source.into())?;
        Ok(Self { env })
    }

    /// Render a template by name.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}
