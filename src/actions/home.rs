//! Home Page

use crate::context::PageHandle;
use crate::endpoints;
use crate::error::ActionResult;
use crate::title;

pub fn swap_title(ctx: &PageHandle) -> ActionResult {
    if ctx.path == endpoints::HOME_PAGE {
        title::start();
    }
    Ok(())
}
