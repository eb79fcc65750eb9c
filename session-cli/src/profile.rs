use crate::utils::shell_quote;

/// Terminal profile overrides collected from `-p KEY=VALUE` flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSettings {
    properties: Vec<String>,
}

impl ProfileSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, property: impl Into<String>) {
        self.properties.push(property.into());
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    pub fn joined(&self) -> String {
        self.properties.join(";")
    }

    /// First statement of the setup script.
    ///
    /// `tool` is the profile tool when it is installed; without it, or without
    /// properties, the statement is a plain `true`.
    pub fn setup_line(&self, tool: Option<&str>) -> String {
        match tool {
            Some(tool) if !self.is_empty() => format!("{} {}", tool, shell_quote(&self.joined())),
            _ => "true".to_string(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ProfileSettings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut settings = Self::new();
        for property in iter {
            settings.add(property);
        }
        settings
    }
}
