use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ConvertError, Converter};

/// A converter for testing that returns a preconfigured result and records
/// the inputs it was handed.
pub struct MockConverter {
    outcome: Result<String, ConvertError>,
    calls: AtomicUsize,
    inputs: Mutex<Vec<String>>,
}

impl MockConverter {
    /// Create a mock that returns the given markdown.
    pub fn success(markdown: &str) -> Self {
        Self::with_outcome(Ok(markdown.to_string()))
    }

    /// Create a mock that fails with the given error.
    pub fn failure(err: ConvertError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<String, ConvertError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// Number of conversions that got past the empty-input check.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Converter for MockConverter {
    async fn convert(&self, text: &str) -> Result<String, ConvertError> {
        if !crate::has_usable_text(text) {
            return Err(ConvertError::EmptyInput);
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut inputs) = self.inputs.lock() {
            inputs.push(text.to_string());
        }
        self.outcome.clone()
    }
}
