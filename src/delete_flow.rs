//! Delete Confirmation Flow
//!
//! closed -> confirming -> in flight -> closed (success)
//!                                   -> confirming with error (failure)
//!
//! While a request is in flight the flow refuses both a second confirm and a
//! cancel, so repeated clicks cannot send duplicate deletes.

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeletePhase {
    #[default]
    Closed,
    Confirming { error: Option<String> },
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteFlow {
    phase: DeletePhase,
}

impl DeleteFlow {
    pub fn is_open(&self) -> bool {
        self.phase != DeletePhase::Closed
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == DeletePhase::InFlight
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            DeletePhase::Confirming { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Show the confirmation step
    pub fn open(&mut self) {
        if self.phase == DeletePhase::Closed {
            self.phase = DeletePhase::Confirming { error: None };
        }
    }

    /// Close the confirmation step; refused while the request is in flight
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            DeletePhase::InFlight => false,
            _ => {
                self.phase = DeletePhase::Closed;
                true
            }
        }
    }

    /// Returns true when the caller should send the delete request
    pub fn confirm(&mut self) -> bool {
        match self.phase {
            DeletePhase::Confirming { .. } => {
                self.phase = DeletePhase::InFlight;
                true
            }
            _ => false,
        }
    }

    /// Record the outcome of the request sent after `confirm`
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if self.phase != DeletePhase::InFlight {
            return;
        }
        self.phase = match outcome {
            Ok(()) => DeletePhase::Closed,
            Err(error) => DeletePhase::Confirming { error: Some(error) },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_confirm_while_in_flight_is_refused() {
        let mut flow = DeleteFlow::default();
        flow.open();

        let mut requests = 0;
        for _ in 0..2 {
            if flow.confirm() {
                requests += 1;
            }
        }

        assert_eq!(requests, 1);
        assert!(flow.is_in_flight());
    }

    #[test]
    fn test_cancel_refused_while_in_flight() {
        let mut flow = DeleteFlow::default();
        flow.open();
        flow.confirm();

        assert!(!flow.cancel());
        assert!(flow.is_open());
    }

    #[test]
    fn test_failure_keeps_confirmation_open() {
        let mut flow = DeleteFlow::default();
        flow.open();
        flow.confirm();
        flow.finish(Err("Task is locked".to_string()));

        assert!(flow.is_open());
        assert!(!flow.is_in_flight());
        assert_eq!(flow.error(), Some("Task is locked"));

        // retry is allowed
        assert!(flow.confirm());
        flow.finish(Ok(()));
        assert_eq!(flow, DeleteFlow::default());
    }

    #[test]
    fn test_confirm_requires_open_dialog() {
        let mut flow = DeleteFlow::default();
        assert!(!flow.confirm());

        flow.finish(Ok(()));
        assert!(!flow.is_open());
    }
}
