use crate::config::MenuConfig;
use super::{process, CollaboratorError, Menu, MenuRequest};

/// `dmenu` (or a compatible picker) attached to the browser window.
pub struct Dmenu {
    config: MenuConfig,
    window: String,
}

impl Dmenu {
    pub fn new(config: MenuConfig, window: impl Into<String>) -> Self {
        Self {
            config,
            window: window.into(),
        }
    }

    fn args(&self, request: &MenuRequest) -> Vec<String> {
        let mut args = vec![
            "-w".to_string(),
            self.window.clone(),
            "-fn".to_string(),
            self.config.font.clone(),
        ];
        if self.config.centered {
            args.push("-c".to_string());
        }
        args.extend([
            "-l".to_string(),
            request.lines.unwrap_or(self.config.lines).to_string(),
            "-bw".to_string(),
            self.config.border_width.to_string(),
        ]);
        args.extend(self.config.extra_args.iter().cloned());
        args.extend(["-p".to_string(), request.prompt.clone()]);
        args
    }
}

impl Menu for Dmenu {
    fn prompt(&self, request: &MenuRequest) -> Result<String, CollaboratorError> {
        let input = request.candidates.join("\n");
        let output = process::run(&self.config.program, &self.args(request), Some(&input))?;
        Ok(output.trim().to_string())
    }
}
