use conan_license_report::prelude::*;

/// Mock GraphSource returning a canned payload
pub struct MockGraphSource {
    pub payload: String,
    pub should_fail: bool,
}

impl MockGraphSource {
    pub fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            payload: String::new(),
            should_fail: true,
        }
    }
}

impl GraphSource for MockGraphSource {
    fn fetch_graph(&self) -> Result<String> {
        if self.should_fail {
            return Err(LicenseReportError::ResolverFailed {
                command: "conan graph info . --profile:all default --format=json".to_string(),
                details: "Mock resolver failure".to_string(),
            }
            .into());
        }
        Ok(self.payload.clone())
    }

    fn describe(&self) -> String {
        "mock resolver".to_string()
    }
}
