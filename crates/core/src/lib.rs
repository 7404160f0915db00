//! pagecheck: drive a headless browser to verify a locally served web app.
//!
//! The crate wraps the CDP driver in two pieces: a [`BrowserSession`] that
//! scopes the Chromium process (nothing driver-owned survives the session),
//! and a [`RoleLocator`] that finds interactive elements by accessible role
//! and name with strict single-match semantics.
//!
//! # Example
//!
//! ```ignore
//! use pagecheck::{BrowserSession, Role, RoleLocator};
//!
//! #[tokio::main]
//! async fn main() -> pagecheck::Result<()> {
//!     let session = BrowserSession::launch().await?;
//!     session.goto("http://localhost:3000").await?;
//!
//!     RoleLocator::new(Role::Button, "Subscription")
//!         .click(session.page())
//!         .await?;
//!
//!     session
//!         .screenshot_to_file("verification/subscription_page.png".as_ref(), false)
//!         .await?;
//!     session.close().await
//! }
//! ```

pub mod error;
pub mod locator;
pub mod session;

pub use error::{Error, Result};
pub use locator::{Role, RoleLocator};
pub use session::{BrowserSession, SessionConfig};
