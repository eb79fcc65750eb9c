#[derive(Debug, Clone, PartialEq)]
pub struct LaunchCommand {
    pub program: String,
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}
