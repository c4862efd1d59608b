//! In-process test client.
//!
//! [`TestApp`] drives an [`Application`] the way a browser would submit a
//! form, without any network transport.
//!
//! ```rust
//! use formgate::controller::{Action, Controller, Expose, Output};
//! use formgate::testing::TestApp;
//! use formgate::Application;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = Controller::builder("root")
//!     .action("hello", Action::new(Expose::Text, |_, p| {
//!         Ok(Output::text(format!("hello {}", p.text("name")?)))
//!     }))
//!     .build()?;
//! let app = TestApp::new(Application::new(controller)?);
//! let response = app.post("/hello", &[("name", "world")])?;
//! assert!(response.contains("hello world"));
//! # Ok(())
//! # }
//! ```

use crate::app::{Application, Request, Response};
use crate::error::FormgateResult;
use crate::params::Params;

/// Response type returned by [`TestApp`].
pub type TestResponse = Response;

/// Test client wrapping an application.
#[derive(Debug, Clone)]
pub struct TestApp {
    app: Application,
}

impl TestApp {
    pub fn new(app: Application) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &Application {
        &self.app
    }

    /// `GET` a path (which may include a query string).
    pub fn get(&self, target: &str) -> FormgateResult<TestResponse> {
        self.app.handle(Request::get(target))
    }

    /// `POST` form fields to a path.
    pub fn post(&self, target: &str, form: &[(&str, &str)]) -> FormgateResult<TestResponse> {
        self.post_with_headers(target, form, &[])
    }

    /// `POST` form fields with extra request headers.
    pub fn post_with_headers(
        &self,
        target: &str,
        form: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> FormgateResult<TestResponse> {
        let params = Params::from_pairs(form.iter().copied());
        let request = headers
            .iter()
            .fold(Request::post(target).form(&params), |request, (name, value)| {
                request.header(*name, *value)
            });
        self.app.handle(request)
    }
}
