//! View models for the list, detail and edit screens.
//!
//! Rendering is left to the host. Each view exposes its state, an explicit
//! `refresh`/`activate` to be called on every focus event, and actions that
//! talk to the host through [`Navigator`] and [`Alert`].

pub mod detail;
pub mod edit;
pub mod list;

use std::fmt;
use std::str::FromStr;

use data_error::StoreError;

pub use detail::{DetailState, DetailView};
pub use edit::{EditView, SaveOutcome};
pub use list::{ListState, ListView};

const LIST_PATH: &str = "list";
const DETAIL_PATH: &str = "detail";
const EDIT_PATH: &str = "edit";
const ID_PARAM: &str = "id=";

/// Addressable screens. The profile identifier travels as a
/// query-style parameter, e.g. `detail?id=3`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    List,
    Detail { id: String },
    Edit { id: String },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "{LIST_PATH}"),
            Route::Detail { id } => write!(f, "{DETAIL_PATH}?{ID_PARAM}{id}"),
            Route::Edit { id } => write!(f, "{EDIT_PATH}?{ID_PARAM}{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, query) = match s.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (s, None),
        };
        let id = query
            .and_then(|query| query.strip_prefix(ID_PARAM))
            .filter(|id| !id.is_empty())
            .map(str::to_owned);

        match (path, id) {
            (LIST_PATH, _) => Ok(Route::List),
            (DETAIL_PATH, Some(id)) => Ok(Route::Detail { id }),
            (EDIT_PATH, Some(id)) => Ok(Route::Edit { id }),
            _ => Err(StoreError::Parse(format!("Unknown route {s:?}"))),
        }
    }
}

/// Host navigation stack
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    /// Return to the previous screen
    fn back(&mut self);
}

/// Host dialogs
pub trait Alert {
    /// Show a message the user dismisses
    fn alert(&mut self, title: &str, message: &str);

    /// Show a blocking message with a single acknowledgement.
    /// Returns once the user has acknowledged it.
    fn confirm(&mut self, title: &str, message: &str);
}
