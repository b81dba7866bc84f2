//! Wizard state machine
//!
//! The UI flow is linear: Idle -> ImageSelected -> Analyzing -> ResultsReady
//! or Failed, and back via reset or tab switch. The state is derived from the
//! store's fields rather than tracked separately, so it can never drift.

/// Current step of the recognition wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// No image selected.
    Idle,
    /// An image is pending and can be submitted.
    ImageSelected,
    /// One recognition call is in flight; re-submission is disabled.
    Analyzing,
    /// The last call succeeded and results are displayed.
    ResultsReady,
    /// The last call failed; the selected image stays visible for a retry.
    Failed,
}

/// Derives the wizard state from the store's fields. `loading` wins over
/// everything else; a lingering error only counts as `Failed` until the next
/// submission clears it.
pub fn derive_state(
    has_image: bool,
    loading: bool,
    has_results: bool,
    has_error: bool,
) -> WizardState {
    if loading {
        WizardState::Analyzing
    } else if has_results {
        WizardState::ResultsReady
    } else if has_error {
        WizardState::Failed
    } else if has_image {
        WizardState::ImageSelected
    } else {
        WizardState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_without_image() {
        assert_eq!(derive_state(false, false, false, false), WizardState::Idle);
    }

    #[test]
    fn test_image_selected() {
        assert_eq!(
            derive_state(true, false, false, false),
            WizardState::ImageSelected
        );
    }

    #[test]
    fn test_analyzing_wins() {
        assert_eq!(
            derive_state(true, true, false, false),
            WizardState::Analyzing
        );
        // a stale error does not mask an in-flight call
        assert_eq!(derive_state(true, true, false, true), WizardState::Analyzing);
    }

    #[test]
    fn test_results_ready() {
        assert_eq!(
            derive_state(true, false, true, false),
            WizardState::ResultsReady
        );
    }

    #[test]
    fn test_failed_keeps_image() {
        // the image stays selected so the user can retry without re-picking
        assert_eq!(derive_state(true, false, false, true), WizardState::Failed);
    }

    #[test]
    fn test_failed_without_image() {
        // camera errors can surface before an image exists
        assert_eq!(derive_state(false, false, false, true), WizardState::Failed);
    }
}
