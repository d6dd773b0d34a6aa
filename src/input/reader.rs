use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::AutoScrollError;

/// Read the text to scroll from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read text from stdin or file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(String)` - Text with at least one non-whitespace character
    /// * `Err(AutoScrollError)` - If the text is blank or an IO error occurs
    pub fn read_text(path: Option<&Path>) -> Result<String, AutoScrollError> {
        let text = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::validate(text)
    }

    fn validate(text: String) -> Result<String, AutoScrollError> {
        if text.trim().is_empty() {
            return Err(AutoScrollError::EmptyInput);
        }
        Ok(text)
    }
}
