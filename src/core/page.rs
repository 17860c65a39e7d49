use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};

/// Accent color applied to headings and links.
const ACCENT_COLOR: &str = "#7c3aed";

pub const PAGE_TITLE: &str = "Wine Preference App - Netlify";
pub const PAGE_HEADING: &str = "Wine Preference App";

/// One suggested alternative host for the full Flask application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostingOption {
    pub name: &'static str,
    pub url: &'static str,
    pub blurb: &'static str,
}

pub const HOSTING_OPTIONS: &[HostingOption] = &[
    HostingOption {
        name: "Render",
        url: "https://render.com",
        blurb: "Offers easy deployment for Flask apps with databases",
    },
    HostingOption {
        name: "PythonAnywhere",
        url: "https://www.pythonanywhere.com",
        blurb: "Specializes in Python web hosting",
    },
    HostingOption {
        name: "Heroku",
        url: "https://www.heroku.com",
        blurb: "Good support for Flask with PostgreSQL",
    },
];

/// The deployment notice document. The default page is the one the function
/// serves; rendering reads only the model, never the environment.
#[derive(Debug, Clone)]
pub struct DeploymentPage {
    title: String,
    heading: String,
    options: Vec<HostingOption>,
}

impl Default for DeploymentPage {
    fn default() -> Self {
        Self::new(
            PAGE_TITLE.to_string(),
            PAGE_HEADING.to_string(),
            HOSTING_OPTIONS.to_vec(),
        )
    }
}

impl DeploymentPage {
    pub fn new(title: String, heading: String, options: Vec<HostingOption>) -> Self {
        Self {
            title,
            heading,
            options,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn options(&self) -> &[HostingOption] {
        &self.options
    }

    /// Render the full HTML document. Repeated renders of the same page are
    /// byte-identical.
    pub fn render(&self) -> String {
        let mut items = String::new();
        for option in &self.options {
            items.push_str(&format!(
                "        <li><a href=\"{}\" target=\"_blank\">{}</a> - {}</li>\n",
                option.url, option.name, option.blurb
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title}</title>
    <style>
      body {{ font-family: system-ui, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 2rem; }}
      .card {{ border: 1px solid #ddd; border-radius: 8px; padding: 1.5rem; margin-bottom: 2rem; }}
      h1 {{ color: {accent}; }}
      a {{ color: {accent}; text-decoration: none; }}
      a:hover {{ text-decoration: underline; }}
    </style>
  </head>
  <body>
    <h1>{heading}</h1>
    <div class="card">
      <h2>Deployment Information</h2>
      <p>This Flask application has been deployed to Netlify. However, running a full Flask application with a database on Netlify's serverless architecture presents some challenges.</p>
      <h3>Next Steps:</h3>
      <p>For a fully functional Wine Preference application with database capabilities, consider deploying to a platform that better supports Flask applications:</p>
      <ul>
{items}      </ul>
    </div>
    <p>The current serverless function is responding correctly, but the full Flask application requires additional configuration for database access in a serverless environment.</p>
  </body>
</html>
"#,
            title = self.title,
            heading = self.heading,
            accent = ACCENT_COLOR,
            items = items,
        )
    }
}

impl Validate for DeploymentPage {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;
        validate_non_empty_string("heading", &self.heading)?;

        for option in &self.options {
            validate_non_empty_string("hosting option name", option.name)?;
            validate_url(option.name, option.url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_required_sections() {
        let html = DeploymentPage::default().render();
        assert!(html.contains("<title>Wine Preference App - Netlify</title>"));
        assert!(html.contains("<h1>Wine Preference App</h1>"));
        assert!(html.contains("<h2>Deployment Information</h2>"));
        assert!(html.contains("<h3>Next Steps:</h3>"));
        assert!(html.contains("The current serverless function is responding correctly"));
    }

    #[test]
    fn test_render_lists_every_hosting_option_as_link() {
        let html = DeploymentPage::default().render();
        for option in HOSTING_OPTIONS {
            let link = format!(
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                option.url, option.name
            );
            assert!(html.contains(&link), "missing link for {}", option.name);
        }
        assert_eq!(html.matches("target=\"_blank\"").count(), 3);
    }

    #[test]
    fn test_render_applies_styling() {
        let html = DeploymentPage::default().render();
        assert!(html.contains("font-family: system-ui, sans-serif"));
        assert!(html.contains("max-width: 800px"));
        assert!(html.contains("border-radius: 8px"));
        assert!(html.contains("#7c3aed"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let page = DeploymentPage::default();
        assert_eq!(page.render(), page.render());
    }

    #[test]
    fn test_default_page_passes_validation() {
        assert!(DeploymentPage::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_hosting_link_fails_validation() {
        let page = DeploymentPage::new(
            "Title".to_string(),
            "Heading".to_string(),
            vec![HostingOption {
                name: "Broken",
                url: "ftp://not-a-web-host",
                blurb: "",
            }],
        );
        assert!(page.validate().is_err());
    }
}
