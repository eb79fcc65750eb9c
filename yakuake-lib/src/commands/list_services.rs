use crate::types::IpcTechnology;

/// Ask a control tool which applications are currently connectable through it
#[derive(Debug, Clone, PartialEq)]
pub struct ListServicesCommand {
    pub technology: IpcTechnology,
}

impl ListServicesCommand {
    pub fn new(technology: IpcTechnology) -> Self {
        Self { technology }
    }
}
