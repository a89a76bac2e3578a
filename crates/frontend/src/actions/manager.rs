//! Manager employee-administration actions

use super::{ActionContext, ActionOutcome};

pub const ACTIVATE_PROMPT: &str = "Activate this employee?";
pub const DEACTIVATE_PROMPT: &str = "Deactivate this employee?";

/// Actions available on the manager's employee list
pub struct ManagerActions {
    ctx: ActionContext,
}

impl ManagerActions {
    /// Wrap the shared action context
    pub fn new(ctx: ActionContext) -> Self {
        Self { ctx }
    }

    /// Confirm, then re-enable the employee
    pub async fn activate_employee(&self, manager_id: &str, employee_id: &str) -> ActionOutcome {
        self.ctx
            .confirm_then(ACTIVATE_PROMPT, || {
                self.ctx.client().activate_employee(manager_id, employee_id)
            })
            .await
    }

    /// Confirm, then disable the employee
    pub async fn deactivate_employee(&self, manager_id: &str, employee_id: &str) -> ActionOutcome {
        self.ctx
            .confirm_then(DEACTIVATE_PROMPT, || {
                self.ctx
                    .client()
                    .deactivate_employee(manager_id, employee_id)
            })
            .await
    }
}
