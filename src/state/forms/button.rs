//! Submit control loading state

/// Label shown while a send is in flight
pub const BUSY_LABEL: &str = "Sending...";

#[derive(Debug, Clone)]
pub struct SubmitButton {
    label: String,
    cached_label: Option<String>,
    loading: bool,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            cached_label: None,
            loading: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Disabled while loading
    pub fn is_enabled(&self) -> bool {
        !self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            if !self.loading {
                self.cached_label = Some(std::mem::replace(&mut self.label, BUSY_LABEL.to_string()));
            }
        } else if let Some(original) = self.cached_label.take() {
            self.label = original;
        }
        self.loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_swaps_and_restores_label() {
        let mut button = SubmitButton::new("Submit Application");
        button.set_loading(true);
        assert_eq!(button.label(), BUSY_LABEL);
        assert!(!button.is_enabled());
        button.set_loading(false);
        assert_eq!(button.label(), "Submit Application");
        assert!(button.is_enabled());
    }

    #[test]
    fn test_double_loading_keeps_original_label() {
        let mut button = SubmitButton::new("Send Message");
        button.set_loading(true);
        button.set_loading(true);
        button.set_loading(false);
        assert_eq!(button.label(), "Send Message");
    }

    #[test]
    fn test_restore_without_loading_is_noop() {
        let mut button = SubmitButton::new("Send");
        button.set_loading(false);
        assert_eq!(button.label(), "Send");
        assert!(button.is_enabled());
    }
}
