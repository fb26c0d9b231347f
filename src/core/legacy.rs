//! Legacy `run()` options
//!
//! Older releases exposed one boolean per output format. These are mapped onto
//! the `format` list of [`ConvertOptions`].

use crate::core::options::ConvertOptions;

/// Options accepted by the deprecated `run()` entry point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyRunOptions {
    /// Output folder (defaults to the input folder)
    pub output_folder: Option<String>,
    /// Password for encrypted PDFs
    pub password: Option<String>,
    /// Replacement for invalid or unrecognized characters
    pub replace_invalid_chars: Option<String>,
    pub generate_markdown: bool,
    pub generate_html: bool,
    pub generate_annotated_pdf: bool,
    pub keep_line_breaks: bool,
    /// Content safety filters to disable (comma-separated)
    pub content_safety_off: Option<String>,
    /// Render complex elements as HTML inside Markdown
    pub html_in_markdown: bool,
    /// Extract images and link them from Markdown
    pub add_image_to_markdown: bool,
    /// Suppress the JSON output
    pub no_json: bool,
    /// Stream engine output to the console
    pub debug: bool,
    pub use_struct_tree: bool,
}

impl LegacyRunOptions {
    /// Output formats implied by the legacy flags
    ///
    /// JSON is included unless suppressed. The Markdown variant is picked by
    /// priority: images, then HTML, then plain.
    pub fn formats(&self) -> Vec<&'static str> {
        let mut formats = Vec::new();
        if !self.no_json {
            formats.push("json");
        }
        if self.generate_markdown {
            if self.add_image_to_markdown {
                formats.push("markdown-with-images");
            } else if self.html_in_markdown {
                formats.push("markdown-with-html");
            } else {
                formats.push("markdown");
            }
        }
        if self.generate_html {
            formats.push("html");
        }
        if self.generate_annotated_pdf {
            formats.push("pdf");
        }
        formats
    }

    /// Equivalent modern options
    pub fn to_convert_options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::new()
            .keep_line_breaks(self.keep_line_breaks)
            .use_struct_tree(self.use_struct_tree)
            .quiet(!self.debug);

        if let Some(folder) = &self.output_folder {
            options = options.output_dir(folder.as_str());
        }
        if let Some(password) = &self.password {
            options = options.password(password.as_str());
        }
        if let Some(replacement) = &self.replace_invalid_chars {
            options = options.replace_invalid_chars(replacement.as_str());
        }
        if let Some(filters) = &self.content_safety_off {
            options = options.content_safety_off(filters.as_str());
        }

        let formats = self.formats();
        if !formats.is_empty() {
            options = options.format(formats);
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::OptionValue;

    fn format_of(options: &ConvertOptions) -> Option<Vec<String>> {
        match options.get("format") {
            Some(OptionValue::List(items)) => Some(items.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_default_is_json_only_and_quiet() {
        let options = LegacyRunOptions::default().to_convert_options();
        assert_eq!(format_of(&options), Some(vec!["json".to_string()]));
        assert!(options.is_quiet());
    }

    #[test]
    fn test_markdown_with_images_wins_over_plain_markdown() {
        let legacy = LegacyRunOptions {
            generate_markdown: true,
            add_image_to_markdown: true,
            html_in_markdown: true,
            ..Default::default()
        };
        let formats = legacy.formats();
        assert!(formats.contains(&"markdown-with-images"));
        assert!(!formats.contains(&"markdown"));
        assert!(!formats.contains(&"markdown-with-html"));
    }

    #[test]
    fn test_html_in_markdown() {
        let legacy = LegacyRunOptions {
            generate_markdown: true,
            html_in_markdown: true,
            ..Default::default()
        };
        assert_eq!(legacy.formats(), vec!["json", "markdown-with-html"]);
    }

    #[test]
    fn test_markdown_modifiers_ignored_without_markdown() {
        let legacy = LegacyRunOptions {
            add_image_to_markdown: true,
            ..Default::default()
        };
        assert_eq!(legacy.formats(), vec!["json"]);
    }

    #[test]
    fn test_no_json_omits_json() {
        let legacy = LegacyRunOptions {
            no_json: true,
            ..Default::default()
        };
        assert!(legacy.formats().is_empty());

        let options = legacy.to_convert_options();
        assert!(options.get("format").is_none());
        assert!(!options.to_args().contains(&"--format".to_string()));
    }

    #[test]
    fn test_all_outputs() {
        let legacy = LegacyRunOptions {
            generate_markdown: true,
            generate_html: true,
            generate_annotated_pdf: true,
            ..Default::default()
        };
        assert_eq!(legacy.formats(), vec!["json", "markdown", "html", "pdf"]);
    }

    #[test]
    fn test_fields_are_carried_over() {
        let legacy = LegacyRunOptions {
            output_folder: Some("/out".to_string()),
            password: Some("secret".to_string()),
            replace_invalid_chars: Some("?".to_string()),
            content_safety_off: Some("all".to_string()),
            keep_line_breaks: true,
            use_struct_tree: true,
            debug: true,
            ..Default::default()
        };
        let args = legacy.to_convert_options().to_args();
        assert_eq!(
            args,
            vec![
                "--output-dir",
                "/out",
                "--password",
                "secret",
                "--format",
                "json",
                "--content-safety-off",
                "all",
                "--keep-line-breaks",
                "--replace-invalid-chars",
                "?",
                "--use-struct-tree",
            ]
        );
    }
}
