mod error;

pub use crate::error::GenerateError;

use std::{
    env, fmt, fs, io,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};
use console::{Emoji, Style};
use walkdir::WalkDir;

/// The two CLI arguments, parsed once and immutable afterwards. The project
/// type stays a free-form string here; membership in the known set is checked
/// by the generator, not the parser.
#[derive(Debug, Clone, clap::Args)]
pub struct Opts {
    /// Name of the project directory to create
    pub name: String,

    /// Project type selecting which template to instantiate
    #[arg(long = "type", value_name = "TYPE", default_value = "monolith")]
    pub project_type: String,
}

/// Enumerated label selecting one of the bundled templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Monolith,
    Microservice,
}

impl ProjectKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "monolith" => Some(ProjectKind::Monolith),
            "microservice" => Some(ProjectKind::Microservice),
            _ => None,
        }
    }

    /// Directory name of this kind's template under the template root.
    pub fn template_dir(&self) -> &'static str {
        match self {
            ProjectKind::Monolith => "monolith",
            ProjectKind::Microservice => "microservice",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_dir())
    }
}

/// A successfully materialized project, returned so the caller can render
/// the confirmation line.
#[derive(Debug)]
pub struct GeneratedProject {
    pub name: String,
    pub kind: ProjectKind,
    pub path: PathBuf,
}

/// Creates project directories from bundled templates. Both paths are
/// injected so the generator can be driven against temp directories in tests
/// instead of reading ambient process state.
#[derive(Debug)]
pub struct Generator {
    working_dir: PathBuf,
    template_root: PathBuf,
}

impl Generator {
    pub fn new(working_dir: impl Into<PathBuf>, template_root: impl Into<PathBuf>) -> Self {
        Generator {
            working_dir: working_dir.into(),
            template_root: template_root.into(),
        }
    }

    /// Production construction: targets resolve against the process working
    /// directory, templates against `templates/` next to the installed
    /// binary, so the tool works regardless of where it is invoked from.
    pub fn from_env() -> Result<Self> {
        let working_dir = env::current_dir()?;
        let exe = env::current_exe()?;
        let install_dir = exe
            .parent()
            .ok_or_else(|| anyhow!("cannot locate installation directory"))?;

        Ok(Generator::new(working_dir, install_dir.join("templates")))
    }

    /// Materializes the project or reports the first failure. All
    /// preconditions (free target path, known type, present template) are
    /// checked before anything is written, so a failed run leaves no stray
    /// entries behind.
    pub fn generate(&self, opts: &Opts) -> Result<GeneratedProject, GenerateError> {
        let target_path = self.working_dir.join(&opts.name);
        if target_path.exists() {
            return Err(GenerateError::TargetExists(opts.name.clone()));
        }

        let kind = ProjectKind::from_name(&opts.project_type)
            .ok_or_else(|| GenerateError::UnknownType(opts.project_type.clone()))?;

        let template_path = self.template_root.join(kind.template_dir());
        let cyan = Style::new().cyan();
        println!(
            "{} {}",
            Emoji("📂", ""),
            cyan.apply_to(format!(
                "Looking for template at: {}",
                template_path.display()
            )),
        );
        if !template_path.exists() {
            return Err(GenerateError::TemplateMissing {
                kind,
                path: template_path,
            });
        }

        fs::create_dir(&target_path).map_err(GenerateError::CreateDir)?;
        copy_tree(&template_path, &target_path).map_err(GenerateError::Copy)?;

        Ok(GeneratedProject {
            name: opts.name.clone(),
            kind,
            path: target_path,
        })
    }
}

/// Recursively copies the template subtree into `target`, preserving relative
/// structure and file contents verbatim. Partial copies are not rolled back.
fn copy_tree(template: &Path, target: &Path) -> io::Result<()> {
    for entry in WalkDir::new(template) {
        let entry = entry?;
        let entry_path = entry
            .path()
            .strip_prefix(template)
            .map_err(io::Error::other)?;
        if entry_path == Path::new("") {
            continue;
        }

        let dest = target.join(entry_path);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }

    Ok(())
}
