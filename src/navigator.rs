//! Host integration: opening a request URL in a new browsing context.

use crate::error::NavigationError;
use log::{debug, warn};
use std::cell::RefCell;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Opened,
    /// The host refused to open a new browsing context.
    Blocked,
}

#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<Navigation, NavigationError>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, url: &str) -> Result<Navigation, NavigationError> {
        (**self).navigate(url)
    }
}

/// Opens URLs in the system's default browser.
///
/// The browser runs detached, so the opened page holds no handle back to us.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<Navigation, NavigationError> {
        match open::that_detached(url) {
            Ok(()) => {
                debug!("Opened browser for {url}");
                Ok(Navigation::Opened)
            }
            Err(e) if is_denial(&e) => {
                warn!("Host refused to open a browser: {e}");
                Ok(Navigation::Blocked)
            }
            Err(e) => Err(NavigationError::Launch(e)),
        }
    }
}

/// Only an explicit refusal counts as blocked. A missing launcher is a
/// launch failure.
fn is_denial(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Records URLs instead of opening them.
#[derive(Debug, Default)]
pub struct DryRunNavigator {
    visited: RefCell<Vec<String>>,
}

impl DryRunNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for DryRunNavigator {
    fn navigate(&self, url: &str) -> Result<Navigation, NavigationError> {
        debug!("Dry run, not opening {url}");
        self.visited.borrow_mut().push(url.to_string());
        Ok(Navigation::Opened)
    }
}
