use sasmodels_core::common::{ConfigError, load_model_parameters};
use sasmodels_core::models::{
    MultiShell, MultilayerVesicle, ScatteringModel, multi_shell, multilayer_vesicle,
};
use serde::de::DeserializeOwned;
use std::path::Path;

type ModelLoader = fn(Option<&Path>) -> Result<Box<dyn ScatteringModel>, ConfigError>;

#[derive(Debug, Clone, Copy)]
pub(super) struct ModelCommandSpec {
    pub(super) name: &'static str,
    pub(super) aliases: &'static [&'static str],
    pub(super) summary: &'static str,
    load: ModelLoader,
}

impl ModelCommandSpec {
    /// Model defaults, overlaid with `parameter_file` when given.
    pub(super) fn load(
        &self,
        parameter_file: Option<&Path>,
    ) -> Result<Box<dyn ScatteringModel>, ConfigError> {
        (self.load)(parameter_file)
    }
}

pub(super) const MODEL_COMMANDS: [ModelCommandSpec; 2] = [
    ModelCommandSpec {
        name: multilayer_vesicle::MODEL_NAME,
        aliases: &["multilayer-vesicle", "vesicle"],
        summary: "multilamellar vesicle of shell/solvent pairs around a solvent core",
        load: load_model::<MultilayerVesicle>,
    },
    ModelCommandSpec {
        name: multi_shell::MODEL_NAME,
        aliases: &["multi-shell"],
        summary: "sphere core wrapped in shell/water pairs",
        load: load_model::<MultiShell>,
    },
];

fn load_model<T>(parameter_file: Option<&Path>) -> Result<Box<dyn ScatteringModel>, ConfigError>
where
    T: ScatteringModel + DeserializeOwned + Default + 'static,
{
    let model = match parameter_file {
        Some(path) => load_model_parameters::<T>(path)?,
        None => T::default(),
    };
    Ok(Box::new(model))
}

pub(super) fn model_command_spec(name: &str) -> Option<ModelCommandSpec> {
    let name = name.trim();
    MODEL_COMMANDS.iter().copied().find(|spec| {
        spec.name.eq_ignore_ascii_case(name)
            || spec
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

pub(super) fn known_model_names() -> String {
    MODEL_COMMANDS
        .iter()
        .map(|spec| spec.name)
        .collect::<Vec<_>>()
        .join(", ")
}
