use crate::model::Dashboard;
use crate::reporter::Reporter;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, dashboard: &Dashboard) -> String {
        serde_json::to_string_pretty(dashboard)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize dashboard: {}"}}"#, e))
    }
}
