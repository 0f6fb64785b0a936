use std::path::PathBuf;
use anyhow::{Context, Result};

#[cfg(feature = "gui")]
use std::collections::HashMap;
#[cfg(feature = "gui")]
use std::path::Path;
#[cfg(feature = "gui")]
use anyhow::bail;
#[cfg(feature = "gui")]
use regex::Regex;

const MANIFEST_TOML: &str = include_str!("Cargo.toml");

#[cfg(feature = "gui")]
const RESOURCES_FILE_NAME: &str = "compiled.gresources";
#[cfg(feature = "gui")]
const UI_XML: &str = include_str!("resources/ui.xml");
#[cfg(feature = "gui")]
const RESOURCES_XML: &str = include_str!("resources/resources.gresource.xml.in");

// ===== TRAITS =====

#[cfg(feature = "gui")]
trait StringExtensions {
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String>;
}

#[cfg(feature = "gui")]
impl<T> StringExtensions for T
where
    T: AsRef<str>,
{
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String> {
        let text = self.as_ref();
        let parts: Vec<&str> = text.split(from).collect();
        let actual_count = parts.len() - 1;

        if actual_count != count {
            bail!(
                "Expected to replace exactly {count} occurrence(s) of '{from}' in the resources manifest, but found {actual_count}."
            );
        }

        Ok(parts.join(to))
    }
}

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    root_dir: PathBuf,
    #[cfg(feature = "gui")]
    output_dir: PathBuf,
    #[cfg(feature = "gui")]
    resources_dir: PathBuf,
    #[cfg(feature = "gui")]
    resources_xml_file: PathBuf,
    #[cfg(feature = "gui")]
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        #[cfg(feature = "gui")]
        {
            let output_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);
            let resources_dir = root_dir.join("resources");
            let resources_xml_file = output_dir.join("resources.xml");
            let compiled_resources_file = output_dir.join(RESOURCES_FILE_NAME);

            Ok(Self {
                root_dir,
                output_dir,
                resources_dir,
                resources_xml_file,
                compiled_resources_file,
            })
        }

        #[cfg(not(feature = "gui"))]
        Ok(Self { root_dir })
    }

    fn catalog_file(&self) -> PathBuf {
        self.root_dir.join("data").join("products.json")
    }
}

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    version: &'static str,
    id: String,
    prefix: String,
    title: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let version = env!("CARGO_PKG_VERSION");

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?;

        let metadata = package.get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let id = Self::extract_string(metadata, "id")?;
        let prefix = Self::extract_string(metadata, "prefix")?;
        let title = Self::extract_string(metadata, "title")?;

        Ok(Self {
            name,
            version,
            id,
            prefix,
            title,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(ToString::to_string)
            .context(format!("Key '{key}' is missing or not a string"))
    }
}

// ===== TEMPLATE EXTRACTOR =====

#[cfg(feature = "gui")]
struct TemplateExtractor {
    template_regex: Regex,
    extracted_templates: HashMap<String, String>,
}

#[cfg(feature = "gui")]
impl TemplateExtractor {
    fn new() -> Result<Self> {
        let template_regex = Regex::new(r#"(?s)<template\s+class="([^"]+)"[^>]*>.*?</template>"#)?;
        let extracted_templates = HashMap::new();
        Ok(Self { template_regex, extracted_templates })
    }

    fn extract_all_templates(&mut self) -> &mut Self {
        for capture in self.template_regex.captures_iter(UI_XML) {
            if let Some(class_match) = capture.get(1) {
                let class_name = heck::AsSnakeCase(class_match.as_str()).to_string();
                let full_template = capture.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
                self.extracted_templates.insert(class_name, full_template);
            }
        }
        self
    }

    fn save_template_files_to_directory(&self, output_path: &Path) -> Result<&Self> {
        for (class_name, template_content) in &self.extracted_templates {
            let file_path = output_path.join(format!("{class_name}.ui"));
            let formatted_template = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>{template_content}</interface>");
            std::fs::write(file_path, formatted_template)?;
        }
        Ok(self)
    }

    fn build_templates_resources_xml(&self) -> String {
        let mut class_names: Vec<&String> = self.extracted_templates.keys().collect();
        class_names.sort();
        class_names
            .into_iter()
            .map(|class_name| format!("<file compressed=\"true\" alias=\"{class_name}.ui\">{class_name}.ui</file>"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ===== RESOURCE COMPILER =====

#[cfg(feature = "gui")]
struct ResourceCompiler<'a> {
    config: &'a BuildConfiguration,
    app_prefix: &'a str,
    source_directories: Vec<&'a Path>,
    template_replacements: HashMap<&'a str, &'a str>,
}

#[cfg(feature = "gui")]
impl<'a> ResourceCompiler<'a> {
    fn new(config: &'a BuildConfiguration, app_prefix: &'a str) -> Self {
        Self {
            config,
            app_prefix,
            source_directories: Vec::new(),
            template_replacements: HashMap::new(),
        }
    }

    fn add_template_replacement(mut self, placeholder: &'a str, value: &'a str) -> Self {
        self.template_replacements.insert(placeholder, value);
        self
    }

    fn add_source_directory(mut self, directory: &'a Path) -> Self {
        self.source_directories.push(directory);
        self
    }

    fn compile_resources(self) -> Result<()> {
        let final_xml = self.build_final_resources_xml()?;
        std::fs::write(&self.config.resources_xml_file, &final_xml)?;

        glib_build_tools::compile_resources(
            &self.source_directories,
            self.config.resources_xml_file.to_str().context("Invalid XML path")?,
            self.config.compiled_resources_file.to_str().context("Invalid compiled file path")?,
        );

        Ok(())
    }

    fn build_final_resources_xml(&self) -> Result<String> {
        let mut final_xml = String::from(RESOURCES_XML);
        for (placeholder, value) in &self.template_replacements {
            final_xml = final_xml.replace_exactly(&format!("@{placeholder}@"), value, 1)?;
        }
        final_xml.replace_exactly("@APP_PREFIX@", self.app_prefix, 1)
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_rerun_triggers(config: &BuildConfiguration) {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=Cargo.toml");
        println!("cargo:rerun-if-changed=resources");
        println!("cargo:rerun-if-changed={}", config.catalog_file().display());
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
    }

    #[cfg(feature = "gui")]
    fn emit_resources_path(resources_path: &Path) {
        println!("cargo:rustc-env=APP_RESOURCES={}", resources_path.display());
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        Ok(Self {
            config: BuildConfiguration::new()?,
            app_metadata: ApplicationMetadata::extract_from_cargo()?,
        })
    }

    fn execute_complete_build(&self) -> Result<()> {
        CargoEnvironmentVariables::emit_rerun_triggers(&self.config);

        #[cfg(feature = "gui")]
        self.compile_gui_resources()?;

        CargoEnvironmentVariables::emit_application_metadata(&self.app_metadata);
        Ok(())
    }

    #[cfg(feature = "gui")]
    fn compile_gui_resources(&self) -> Result<()> {
        let mut extractor = TemplateExtractor::new()?;
        let templates_xml = extractor
            .extract_all_templates()
            .save_template_files_to_directory(&self.config.output_dir)?
            .build_templates_resources_xml();

        ResourceCompiler::new(&self.config, &self.app_metadata.prefix)
            .add_template_replacement("APP_TEMPLATES", &templates_xml)
            .add_source_directory(&self.config.output_dir)
            .add_source_directory(&self.config.resources_dir)
            .compile_resources()?;

        CargoEnvironmentVariables::emit_resources_path(&self.config.compiled_resources_file);
        Ok(())
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
