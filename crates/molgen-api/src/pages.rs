//! Static HTML pages: the interactive generator UI and the documentation page.
//!
//! Both pages depend only on the compile-time catalog, so they are rendered
//! once when [`AppState`](crate::state::AppState) is built and served as
//! plain strings afterwards. Templates end in `.html`, so `minijinja`
//! escapes every interpolated value.

use minijinja::{Environment, context};
use molgen_core::catalog;

use crate::error::StateError;

const INDEX_TEMPLATE: &str = "index.html";
const DOCS_TEMPLATE: &str = "docs.html";

/// Pre-rendered HTML pages.
#[derive(Debug, Clone)]
pub struct Pages {
    /// `GET /` body.
    pub index: String,
    /// `GET /docs` body.
    pub docs: String,
}

impl Pages {
    /// Render both pages from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Page`] if a template fails to compile or render.
    pub fn render() -> Result<Self, StateError> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))
            .map_err(|source| StateError::Page {
                name: INDEX_TEMPLATE,
                source,
            })?;
        env.add_template(DOCS_TEMPLATE, include_str!("../templates/docs.html"))
            .map_err(|source| StateError::Page {
                name: DOCS_TEMPLATE,
                source,
            })?;

        let ctx = context! {
            info => catalog::service_info(),
            categories => catalog::all(),
        };

        Ok(Self {
            index: render(&env, INDEX_TEMPLATE, &ctx)?,
            docs: render(&env, DOCS_TEMPLATE, &ctx)?,
        })
    }
}

fn render(
    env: &Environment<'_>,
    name: &'static str,
    ctx: &minijinja::Value,
) -> Result<String, StateError> {
    env.get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|source| StateError::Page { name, source })
}
