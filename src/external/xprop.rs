use log::debug;
use super::{process, CollaboratorError, Properties};

/// Reads and writes X11 window properties through the `xprop` tool.
pub struct XProp {
    program: String,
    window: String,
}

impl XProp {
    pub fn new(program: impl Into<String>, window: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            window: window.into(),
        }
    }
}

impl Properties for XProp {
    fn get(&self, name: &str) -> Result<String, CollaboratorError> {
        let args = vec!["-id".to_string(), self.window.clone(), name.to_string()];
        let output = process::run(&self.program, &args, None)?;
        let value = quoted_value(&output).unwrap_or_default();
        debug!("{} = {:?}", name, value);
        Ok(value.to_string())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), CollaboratorError> {
        let args = vec![
            "-id".to_string(),
            self.window.clone(),
            "-f".to_string(),
            name.to_string(),
            "8u".to_string(),
            "-set".to_string(),
            name.to_string(),
            value.to_string(),
        ];
        process::run(&self.program, &args, None)?;
        debug!("{} <- {:?}", name, value);
        Ok(())
    }
}

/// Text between the first two double quotes of `xprop` output, e.g.
/// `_SURF_URI(UTF8_STRING) = "https://a.org"`.
fn quoted_value(output: &str) -> Option<&str> {
    let start = output.find('"')? + 1;
    let len = output[start..].find('"')?;
    Some(&output[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_quoted_value() {
        assert_eq!(
            quoted_value("_SURF_URI(UTF8_STRING) = \"https://a.org/?q=1\"\n"),
            Some("https://a.org/?q=1")
        );
        assert_eq!(quoted_value("_SURF_URI:  not found.\n"), None);
        assert_eq!(quoted_value("_SURF_URI(UTF8_STRING) = \"\""), Some(""));
    }
}
