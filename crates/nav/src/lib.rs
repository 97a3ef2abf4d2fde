//! Navigation state engine for the Corbel admin shell.
//!
//! The engine keeps the multi-level sidebar menu synchronized with the
//! current route and the viewport. It is split the same way the data
//! flows: the [`store`] loads and validates the static menu trees, the
//! [`resolve`] module maps the current path onto the active node and
//! its collapse ancestor, the [`state`] module is the message-driven
//! expansion state machine, the [`policy`] module derives the
//! responsive display decisions, and the [`breadcrumb`] module turns a
//! resolver result into a linear trail. The [`navigator`] ties them
//! together for the hosting shell.
//!
//! State updates are pure and synchronous; side effects (document
//! title, root styling flags) leave the engine as [`state::Effect`]
//! values for the imperative shell to execute.

pub mod breadcrumb;
pub mod navigator;
pub mod policy;
pub mod resolve;
pub mod state;
pub mod store;

pub use breadcrumb::{Breadcrumb, Crumb};
pub use corbel_types::{IconRef, MenuConfig, MenuVariant, NavCollapse, NavItem, NavNode};
pub use navigator::Navigator;
pub use policy::{ChildrenDisplay, PolicyDecision, SidebarMode};
pub use resolve::{ResolverResult, resolve};
pub use state::{Effect, ExpansionState, Msg, NodeScope};
pub use store::{ConfigError, MenuStore, NavTree};
