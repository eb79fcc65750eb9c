use crate::types::IpcTechnology;

/// A method invocation on one of Yakuake's remote objects
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCall {
    pub technology: IpcTechnology,
    pub object: String,
    pub method: String,
    pub args: Vec<String>,
}

impl RemoteCall {
    pub fn new(technology: IpcTechnology, object: &str, method: &str) -> Self {
        Self {
            technology,
            object: object.to_string(),
            method: method.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Arguments for the control tool, after the service name
    pub fn tool_args(&self) -> Vec<String> {
        let mut args = vec![self.object.clone(), self.method.clone()];
        args.extend(self.args.iter().cloned());
        args
    }
}
