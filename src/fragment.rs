//! Fragment Patching
//!
//! The one rule every AJAX handler shares: a truthy `result` replaces the
//! target region, anything else leaves it alone.

use crate::error::ActionResult;
use crate::models::FragmentResponse;

/// A page region that can take server-rendered HTML
pub trait FragmentTarget {
    fn replace_html(&self, html: &str);
}

impl FragmentTarget for web_sys::Element {
    fn replace_html(&self, html: &str) {
        self.set_inner_html(html);
    }
}

/// What happened to the region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Patch {
    Replaced,
    Unchanged,
}

/// Apply a response to `target`. Errors are handed back untouched so the
/// caller can log them; the region is never modified in that case.
pub fn apply<T>(target: &T, response: ActionResult<FragmentResponse>) -> ActionResult<Patch>
where
    T: FragmentTarget + ?Sized,
{
    let response = response?;
    Ok(match response.html() {
        Some(html) => {
            target.replace_html(html);
            Patch::Replaced
        }
        None => Patch::Unchanged,
    })
}
