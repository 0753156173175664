//! [`PluginFixture`] builder for one plugin description file.

/// One plugin inside a test package.
///
/// Defaults describe a complete, publishable plugin: name, ISC license,
/// version 2.0 (stable), a developer and a GUI screenshot.
///
/// # Example
///
/// ```rust
/// use patchbot_test_utils::PluginFixture;
///
/// let plugin = PluginFixture::new("reverb")
///     .label("Big Reverb")
///     .plugin_type("lv2:ReverbPlugin")
///     .version(0, 3);
/// assert!(plugin.to_turtle().contains("lv2:ReverbPlugin"));
/// ```
#[derive(Debug, Clone)]
pub struct PluginFixture {
    pub slug: String,
    pub uri: String,
    pub name: Option<String>,
    pub label: Option<String>,
    /// Turtle object for `doap:license`, written verbatim
    pub license: Option<String>,
    pub comment: Option<String>,
    pub developer: Option<String>,
    pub maintainer: Option<String>,
    pub brand: Option<String>,
    pub gui_brand: Option<String>,
    pub minor: Option<u32>,
    pub micro: Option<u32>,
    pub types: Vec<String>,
    pub screenshot: bool,
}

impl PluginFixture {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            uri: format!("urn:patchbot:test:{slug}"),
            name: Some(title_case(slug)),
            label: None,
            license: Some("<http://opensource.org/licenses/isc>".to_string()),
            comment: None,
            developer: Some("Jane Doe".to_string()),
            maintainer: None,
            brand: None,
            gui_brand: None,
            minor: Some(2),
            micro: Some(0),
            types: Vec::new(),
            screenshot: true,
        }
    }

    pub fn uri(mut self, uri: &str) -> Self {
        self.uri = uri.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn no_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// License as an IRI, e.g. `http://opensource.org/licenses/MIT`.
    pub fn license_iri(mut self, iri: &str) -> Self {
        self.license = Some(format!("<{iri}>"));
        self
    }

    /// License as a plain string literal.
    pub fn license_text(mut self, text: &str) -> Self {
        self.license = Some(format!("{text:?}"));
        self
    }

    pub fn no_license(mut self) -> Self {
        self.license = None;
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn developer(mut self, name: &str) -> Self {
        self.developer = Some(name.to_string());
        self
    }

    pub fn no_developer(mut self) -> Self {
        self.developer = None;
        self
    }

    pub fn maintainer(mut self, name: &str) -> Self {
        self.maintainer = Some(name.to_string());
        self
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }

    pub fn gui_brand(mut self, brand: &str) -> Self {
        self.gui_brand = Some(brand.to_string());
        self
    }

    pub fn version(mut self, minor: u32, micro: u32) -> Self {
        self.minor = Some(minor);
        self.micro = Some(micro);
        self
    }

    pub fn no_version(mut self) -> Self {
        self.minor = None;
        self.micro = None;
        self
    }

    /// Add an `rdf:type`, as a prefixed name (`lv2:ReverbPlugin`) or `<iri>`.
    pub fn plugin_type(mut self, class: &str) -> Self {
        self.types.push(class.to_string());
        self
    }

    pub fn no_screenshot(mut self) -> Self {
        self.screenshot = false;
        self
    }

    /// File name of the description file within the package.
    pub fn file_name(&self) -> String {
        format!("{}.ttl", self.slug)
    }

    /// Package-relative path of the screenshot image.
    pub fn screenshot_path(&self) -> String {
        format!("modgui/screenshot-{}.png", self.slug)
    }

    /// Render the plugin description, without prefixes.
    pub fn to_turtle(&self) -> String {
        let mut types = vec!["lv2:Plugin".to_string()];
        types.extend(self.types.iter().cloned());

        let mut statements = vec![format!("a {}", types.join(", "))];
        if let Some(name) = &self.name {
            statements.push(format!("doap:name {name:?}"));
        }
        if let Some(label) = &self.label {
            statements.push(format!("doap:label {label:?}"));
        }
        if let Some(license) = &self.license {
            statements.push(format!("doap:license {license}"));
        }
        if let Some(comment) = &self.comment {
            statements.push(format!("rdfs:comment {comment:?}"));
        }
        if let Some(developer) = &self.developer {
            statements.push(format!("doap:developer [ foaf:name {developer:?} ]"));
        }
        if let Some(maintainer) = &self.maintainer {
            statements.push(format!("doap:maintainer [ foaf:name {maintainer:?} ]"));
        }
        if let Some(brand) = &self.brand {
            statements.push(format!("mod:brand {brand:?}"));
        }
        if let Some(minor) = self.minor {
            statements.push(format!("lv2:minorVersion {minor}"));
        }
        if let Some(micro) = self.micro {
            statements.push(format!("lv2:microVersion {micro}"));
        }
        if self.screenshot || self.gui_brand.is_some() {
            let mut gui = Vec::new();
            if self.screenshot {
                gui.push(format!("modgui:screenshot <{}>", self.screenshot_path()));
            }
            if let Some(brand) = &self.gui_brand {
                gui.push(format!("modgui:brand {brand:?}"));
            }
            statements.push(format!("modgui:gui [ {} ]", gui.join(" ; ")));
        }

        format!("<{}>\n    {} .\n", self.uri, statements.join(" ;\n    "))
    }
}

fn title_case(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
