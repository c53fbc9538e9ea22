//! Picture frame generator command line
//!
//! Resolves a profile and frame parameters, builds the frame and writes the
//! requested outputs.

pub mod args;
pub mod report;

use frame_core::{
    ConfigError, ExportError, ExportOptions, FrameError, FrameParams, FrameProject, FrameStore, Profile,
    ProfileError, load_file, presets, save_stl,
};
use thiserror::Error;

pub use args::{Cli, Command, GenerateOptions, ProfileSource};
pub use report::FrameReport;

/// Command-line errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown preset `{0}` (available: {names})", names = presets::NAMES.join(", "))]
    UnknownPreset(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Summary error: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Resolve the project described by the generate options
pub fn resolve_project(options: &GenerateOptions) -> Result<FrameProject, CliError> {
    if let Some(path) = &options.project {
        return Ok(FrameProject::load(path)?);
    }

    let (name, profile) = match options.profile_source() {
        Some(ProfileSource::Preset(name)) => {
            let profile = presets::by_name(&name).ok_or_else(|| CliError::UnknownPreset(name.clone()))?;
            (name, profile)
        }
        Some(ProfileSource::File(path)) => {
            let profile: Profile = load_file(&path)?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "profile".to_string());
            (name, profile)
        }
        None => ("classic_moulding".to_string(), presets::classic_moulding()),
    };

    let mut project = FrameProject::new(name, profile);
    if let Some(path) = &options.params {
        project.params = FrameParams::load(path)?;
    }
    Ok(project)
}

/// Build the frame and write every requested output
pub fn generate(options: &GenerateOptions) -> Result<(), CliError> {
    let project = resolve_project(options)?;
    tracing::info!("Building frame '{}' ({} profile points)", project.name, project.profile.len());

    let store = FrameStore::new();
    let frame = store.rebuild(&project.profile, &project.params)?;
    tracing::info!(
        "Built {} elements, {} vertices, {} triangles",
        frame.elements().len(),
        frame.vertex_count(),
        frame.triangle_count()
    );

    if let Some(path) = &options.stl {
        let export = if options.sides_only {
            ExportOptions::sides_only()
        } else {
            ExportOptions::default()
        };
        save_stl(&frame, path, &export)?;
    }

    if let Some(path) = &options.save_project {
        project.save(path)?;
        tracing::info!("Saved project to {}", path.display());
    }

    if options.summary {
        println!("{}", FrameReport::new(&project.name, &frame).to_json()?);
    }

    Ok(())
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Command::Presets) => {
            for name in presets::NAMES {
                println!("{name}");
            }
            Ok(())
        }
        None => generate(&cli.generate),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_default_project_is_classic() {
        let project = resolve_project(&GenerateOptions::default()).unwrap();
        assert_eq!(project.profile, presets::classic_moulding());
        assert_eq!(project.params, FrameParams::default());
    }

    #[test]
    fn test_unknown_preset() {
        let options = GenerateOptions {
            preset: Some("baroque".to_string()),
            ..Default::default()
        };
        let err = resolve_project(&options).unwrap_err();
        assert!(matches!(err, CliError::UnknownPreset(_)));
        assert!(err.to_string().contains("wedge"));
    }

    #[test]
    fn test_generate_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let stl = dir.path().join("frame.stl");
        let project = dir.path().join("frame.ron");

        let options = GenerateOptions {
            preset: Some("wedge".to_string()),
            stl: Some(stl.clone()),
            sides_only: true,
            save_project: Some(project.clone()),
            ..Default::default()
        };
        generate(&options).unwrap();

        assert!(stl.exists());
        let saved = FrameProject::load(&project).unwrap();
        assert_eq!(saved.name, "wedge");
        assert_eq!(saved.profile, presets::wedge());
    }

    #[test]
    fn test_profile_and_params_files() {
        let dir = tempfile::tempdir().unwrap();
        let profile_path = dir.path().join("lip.json");
        let params_path = dir.path().join("params.json");

        std::fs::write(&profile_path, presets::classic_moulding().to_json().unwrap()).unwrap();
        std::fs::write(&params_path, r#"{ "width": 24.0, "has_glass": false }"#).unwrap();

        let options = GenerateOptions {
            profile: Some(profile_path),
            params: Some(params_path),
            ..Default::default()
        };
        let project = resolve_project(&options).unwrap();
        assert_eq!(project.name, "lip");
        assert_eq!(project.params.width, 24.0);
        assert!(!project.params.has_glass);
        assert_eq!(project.params.height, 20.0);
    }

    #[test]
    fn test_presets_command() {
        let cli = Cli {
            command: Some(Command::Presets),
            generate: GenerateOptions::default(),
        };
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_missing_project_file() {
        let options = GenerateOptions {
            project: Some(PathBuf::from("/nonexistent/frame.ron")),
            ..Default::default()
        };
        assert!(matches!(resolve_project(&options), Err(CliError::Config(_))));
    }
}
