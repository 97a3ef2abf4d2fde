//! Breadcrumb trail built from the resolver's output.

use corbel_types::NavNode;

use crate::resolve::ResolverResult;

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Node id, or "home" for the synthetic root entry.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Navigation target; collapse ancestors have none.
    pub url: Option<String>,
}

/// Page title plus the linear root → parent → active trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Title of the active page.
    pub title: String,
    /// Trail entries in display order. Empty when the active branch
    /// opted out of breadcrumbs; the title still applies.
    pub trail: Vec<Crumb>,
}

const HOME_ID: &str = "home";
const HOME_TITLE: &str = "Home";
const HOME_URL: &str = "/";

/// Builds the breadcrumb for a resolver result.
///
/// Returns `None` when nothing matched: the header renders without a
/// trail and the document title is left alone.
pub fn build(result: &ResolverResult<'_>) -> Option<Breadcrumb> {
    let active = result.active_item?;

    let show_trail = match active {
        NavNode::Item(_) => true,
        NavNode::Collapse(collapse) => collapse.breadcrumbs,
    };
    let title = active.title().to_string();
    if !show_trail {
        return Some(Breadcrumb {
            title,
            trail: Vec::new(),
        });
    }

    let mut trail = vec![Crumb {
        id: HOME_ID.into(),
        title: HOME_TITLE.into(),
        url: Some(HOME_URL.into()),
    }];
    if let Some(parent) = result.active_parent {
        trail.push(Crumb {
            id: parent.id.clone(),
            title: parent.title.clone(),
            url: None,
        });
    }
    trail.push(Crumb {
        id: active.id().to_string(),
        title: active.title().to_string(),
        url: active.url().map(str::to_string),
    });

    Some(Breadcrumb { title, trail })
}
